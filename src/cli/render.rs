//! Terminal rendering of menus, tables and summaries.

use std::fmt::Display;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::{
    movie::MovieRecord,
    session::events::SessionEvent,
    stats::aggregate::{Extremum, RatingSummary},
};

pub fn error(msg: impl Display) -> String {
    msg.to_string().red().bold().to_string()
}

pub fn warning(msg: impl Display) -> String {
    msg.to_string().yellow().bold().to_string()
}

pub fn success(msg: impl Display) -> String {
    msg.to_string().green().bold().to_string()
}

pub fn heading(msg: impl Display) -> String {
    msg.to_string().cyan().bold().to_string()
}

pub fn banner() -> String {
    "********** My Movies Database **********"
        .magenta()
        .bold()
        .to_string()
}

pub fn menu() -> String {
    heading(
        "\nMenu:\n\
         0. Exit\n\
         1. List movies\n\
         2. Add movie\n\
         3. Delete movie\n\
         4. Update movie\n\
         5. Stats\n\
         6. Random movie\n\
         7. Search movie\n\
         8. Movies sorted by rating\n\
         9. Movies sorted by year\n\
         10. Generate website",
    )
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Title/rating/year table, titles padded to the widest display width.
pub fn movie_table(records: &[&MovieRecord]) -> String {
    let title_width = records
        .iter()
        .map(|r| r.title.width())
        .max()
        .unwrap_or(0)
        .max("TITLE".len());

    let mut lines = vec![
        warning(format!("\n{} movies in total\n", records.len())),
        format!("{} | {:^6} | YEAR", pad("TITLE", title_width), "RATING")
            .magenta()
            .bold()
            .to_string(),
        format!("{}-|{}|------", "-".repeat(title_width), "-".repeat(8)),
    ];
    for rec in records {
        lines.push(format!(
            "{} | {} | {}",
            pad(&rec.title, title_width).blue().bold(),
            format!("{:^6}", format!("{:.1}", rec.rating)).green(),
            rec.year.to_string().green(),
        ));
    }
    lines.join("\n")
}

/// One line per movie, as used by search and sorted views.
pub fn movie_line(rec: &MovieRecord) -> String {
    format!(
        "{}, {} {}",
        rec.title.as_str().blue().bold(),
        format!("Rating: {:.1},", rec.rating).green(),
        format!("Year: {}", rec.year).magenta(),
    )
}

pub fn movie_lines(records: &[&MovieRecord]) -> String {
    records
        .iter()
        .map(|r| movie_line(r))
        .collect::<Vec<_>>()
        .join("\n")
}

fn extremum(label: &str, ext: &Extremum<'_>) -> String {
    let mut lines = vec![format!("\n{label}").blue().bold().to_string()];
    for rec in &ext.movies {
        lines.push(format!(
            "-> {} - {}",
            rec.title.as_str().magenta().bold(),
            format!("{:.1}", ext.rating).green().bold()
        ));
    }
    lines.join("\n")
}

pub fn summary(summary: &RatingSummary<'_>) -> String {
    [
        format!(
            "\n{} {}",
            "Average rating:".blue().bold(),
            format!("{:.1}", summary.mean).green().bold()
        ),
        format!(
            "{} {}",
            "Median rating:".blue().bold(),
            format!("{:.1}", summary.median).green().bold()
        ),
        extremum("Best movie(s):", &summary.best),
        extremum("Worst movie(s):", &summary.worst),
    ]
    .join("\n")
}

pub fn random_pick(rec: &MovieRecord) -> String {
    format!(
        "\n{} {}, rated {} from {}",
        "Your movie for tonight:".blue().bold(),
        rec.title.as_str().green().bold(),
        rec.rating.to_string().green().bold(),
        rec.year.to_string().green().bold(),
    )
}

pub fn event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Added { title } => success(format!("\n{title} successfully added")),
        SessionEvent::Deleted { title } => warning(format!("\n{title} successfully deleted")),
        SessionEvent::Updated {
            title,
            year: true,
            rating: true,
        } => warning(format!("\n{title} rating & year updated")),
        SessionEvent::Updated {
            title, year: true, ..
        } => warning(format!("\n{title} year updated")),
        SessionEvent::Updated { title, .. } => warning(format!("\n{title} rating updated")),
    }
}
