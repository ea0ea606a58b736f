//! Static HTML page generation from stored movies.
//!
//! A template read from disk carries two placeholders: the page title and the
//! movie grid. Each movie becomes one `<li class="movie-item">` fragment.

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

use crate::movie::MovieRecord;

pub const TITLE_PLACEHOLDER: &str = "__TEMPLATE_TITLE__";
pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";
/// Image used when a record has no usable poster.
pub const PLACEHOLDER_IMAGE: &str = "placeholder_image.png";
pub const DEFAULT_PAGE_TITLE: &str = "My Movie App";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read template {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write page {path}: {source}")]
    WritePage {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where and how to render the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub page_title: String,
}

/// Poster source for `poster_url`, falling back to [`PLACEHOLDER_IMAGE`].
///
/// Remote URLs are kept as is; anything else must be an existing local path.
pub fn poster_src(poster_url: &str) -> &str {
    let poster = poster_url.trim();
    if poster.is_empty() {
        return PLACEHOLDER_IMAGE;
    }
    if poster.starts_with("http://") || poster.starts_with("https://") {
        return poster;
    }
    if Path::new(poster).exists() {
        poster
    } else {
        PLACEHOLDER_IMAGE
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_grid<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let mut out = String::new();
    for rec in records {
        let title = escape_html(&rec.title);
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "<li class=\"movie-item\">\n    \
             <img class=\"movie-poster\" src=\"{}\" alt=\"{}\">\n    \
             <h3>{}</h3>\n    \
             <p>{}</p>\n    \
             <p>{:.1}</p>\n\
             </li>\n",
            escape_html(poster_src(&rec.poster_url)),
            title,
            title,
            rec.year,
            rec.rating,
        );
    }
    out
}

pub fn render_page<'a, I>(template: &str, page_title: &str, records: I) -> String
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    template
        .replace(TITLE_PLACEHOLDER, &escape_html(page_title))
        .replace(GRID_PLACEHOLDER, &render_grid(records))
}

/// Renders `records` through the configured template and writes the page.
pub fn generate(settings: &SiteSettings, records: &[MovieRecord]) -> Result<PathBuf, SiteError> {
    let template =
        fs::read_to_string(&settings.template_path).map_err(|source| SiteError::ReadTemplate {
            path: settings.template_path.clone(),
            source,
        })?;

    let html = render_page(&template, &settings.page_title, records);
    fs::write(&settings.output_path, html).map_err(|source| SiteError::WritePage {
        path: settings.output_path.clone(),
        source,
    })?;

    info!(
        "Wrote {} movies to {}",
        records.len(),
        settings.output_path.display()
    );
    Ok(settings.output_path.clone())
}
