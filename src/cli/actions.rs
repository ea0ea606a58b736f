use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{
    lookup::{LookupMatch, LookupOutcome},
    movie::{MovieDraft, MoviePatch},
    session::handle::SessionError,
    site,
    stats::{aggregate, sort},
    types::{self, MIN_YEAR},
    validate,
};

use super::{render, App, MenuAction, MAX_LOOKUP_ATTEMPTS};

const NO_MOVIES: &str = "No movies found. Add some movies first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddMode {
    Lookup,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AfterFailure {
    Retry,
    Manual,
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateField {
    Rating,
    Year,
    Both,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub(super) fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::Exit => Ok(()),
            MenuAction::List => self.list_movies(),
            MenuAction::Add => self.add_movie(),
            MenuAction::Delete => self.delete_movie(),
            MenuAction::Update => self.update_movie(),
            MenuAction::Stats => self.show_stats(),
            MenuAction::Random => self.random_movie(),
            MenuAction::Search => self.search_movie(),
            MenuAction::SortByRating => self.sorted_view(true),
            MenuAction::SortByYear => self.sorted_view(false),
            MenuAction::GenerateWebsite => self.generate_website(),
        }
    }

    fn list_movies(&mut self) -> Result<()> {
        let catalog = self.session.catalog();
        if catalog.is_empty() {
            return self.prompter.say(render::error(NO_MOVIES));
        }
        let table = render::movie_table(&catalog.records());
        self.prompter.say(table)
    }

    fn add_movie(&mut self) -> Result<()> {
        let added = if self.lookup.is_some() {
            match self.ask_add_mode()? {
                AddMode::Lookup => self.add_via_lookup()?,
                AddMode::Manual => self.add_manually()?,
            }
        } else {
            self.prompter.say(render::warning(
                "\nMetadata lookup is not configured, adding manually.",
            ))?;
            self.add_manually()?
        };

        if added {
            self.prompter
                .say(render::success("\nMovie successfully added to your database!"))
        } else {
            self.prompter
                .say(render::warning("\nNo movie was added this time."))
        }
    }

    fn ask_add_mode(&mut self) -> Result<AddMode> {
        self.prompter.say(render::heading(
            "\nHow would you like to add the movie?\n\
             1. Search via API (automatic details)\n\
             2. Enter manually",
        ))?;
        let mode = match self.prompter.ask_number("Enter choice (1 or 2): ", &[1, 2])? {
            1 => AddMode::Lookup,
            _ => AddMode::Manual,
        };
        Ok(mode)
    }

    fn add_via_lookup(&mut self) -> Result<bool> {
        for attempt in 1..=MAX_LOOKUP_ATTEMPTS {
            let query = self
                .prompter
                .ask_valid("Enter movie title to search: ", |s| {
                    validate::lookup_query(s).map(str::to_string)
                })?;
            self.prompter
                .say(render::warning(format!("Searching for '{query}'...")))?;

            let outcome = match self.lookup.as_deref() {
                Some(lookup) => lookup.lookup(&query),
                None => return self.add_manually(),
            };
            match outcome {
                Ok(LookupOutcome::Found(found)) => return self.confirm_match(found),
                Ok(LookupOutcome::NotFound { reason }) => self
                    .prompter
                    .say(render::error(format!("Movie '{query}' not found: {reason}")))?,
                Err(err) => self.prompter.say(render::error(format!(
                    "Unable to fetch movie data: {err}"
                )))?,
            }

            match self.ask_after_failure(attempt < MAX_LOOKUP_ATTEMPTS)? {
                AfterFailure::Retry => continue,
                AfterFailure::Manual => return self.add_manually(),
                AfterFailure::Abort => return Ok(false),
            }
        }
        Ok(false)
    }

    fn ask_after_failure(&mut self, can_retry: bool) -> Result<AfterFailure> {
        if can_retry {
            self.prompter.say(render::heading(
                "\nWhat would you like to do?\n\
                 1. Try searching for a different movie\n\
                 2. Enter movie details manually\n\
                 3. Return to main menu",
            ))?;
            return Ok(match self.prompter.ask_number("Enter choice (1-3): ", &[1, 2, 3])? {
                1 => AfterFailure::Retry,
                2 => AfterFailure::Manual,
                _ => AfterFailure::Abort,
            });
        }

        self.prompter.say(render::heading(format!(
            "\nNo lookup attempts left ({MAX_LOOKUP_ATTEMPTS} used).\n\
             2. Enter movie details manually\n\
             3. Return to main menu"
        )))?;
        Ok(match self.prompter.ask_number("Enter choice (2-3): ", &[2, 3])? {
            2 => AfterFailure::Manual,
            _ => AfterFailure::Abort,
        })
    }

    fn confirm_match(&mut self, found: LookupMatch) -> Result<bool> {
        let poster = if found.poster_url.is_empty() {
            "Not available"
        } else {
            "Available"
        };
        self.prompter.say(format!(
            "\n{}\nTitle: {}\nYear: {}\nIMDB Rating: {}/10\nPoster: {}",
            render::success("Found movie:"),
            found.title,
            found.year,
            found.rating,
            poster
        ))?;

        let warnings = found.data_warnings();
        if !warnings.is_empty() {
            self.prompter.say(render::warning("\nData Quality Warnings:"))?;
            for w in warnings {
                self.prompter.say(render::warning(w))?;
            }
        }

        if let Some(existing) = self.session.find(&found.title) {
            let msg = format!("\n{} already exists in database", existing.title);
            self.prompter.say(render::error(msg))?;
            return Ok(false);
        }

        if !self
            .prompter
            .ask_yes_no("\nAdd this movie to your database? (y/n): ")?
        {
            self.prompter
                .say(render::warning("Movie not added. Returning to menu..."))?;
            return Ok(false);
        }

        let current_year = self.session.current_year();
        let mut draft = found.into_draft();
        if !types::year_in_range(draft.year, current_year) {
            let msg = if draft.year == 0 {
                "The lookup has no release year, please enter it.".to_string()
            } else {
                format!(
                    "The lookup reports release year {}, outside {MIN_YEAR}-{current_year}. Please enter it.",
                    draft.year
                )
            };
            self.prompter.say(render::warning(msg))?;
            draft.year = self.prompter.ask_year(current_year)?;
        }
        self.store_draft(draft)
    }

    fn add_manually(&mut self) -> Result<bool> {
        let title = self.prompter.ask_title()?;
        if let Some(existing) = self.session.find(&title) {
            let msg = format!("\n{} already exists in database", existing.title);
            self.prompter.say(render::error(msg))?;
            return Ok(false);
        }
        let rating = self.prompter.ask_rating()?;
        let year = self.prompter.ask_year(self.session.current_year())?;
        self.store_draft(MovieDraft::manual(title, year, rating))
    }

    fn store_draft(&mut self, draft: MovieDraft) -> Result<bool> {
        match self.session.add(draft) {
            Ok(event) => {
                self.prompter.say(render::event(&event))?;
                Ok(true)
            }
            Err(err) => {
                self.report(&err)?;
                Ok(false)
            }
        }
    }

    fn delete_movie(&mut self) -> Result<()> {
        let title = self.prompter.ask_title()?;
        let Some(stored) = self.session.find(&title).map(|r| r.title.clone()) else {
            return self
                .prompter
                .say(render::error(format!("\n{title} not found in database")));
        };
        self.prompter
            .say(render::success(format!("\n{stored} found in database")))?;

        let prompt = format!("\nDelete '{stored}'? Enter Yes/Y or No/N: ");
        if !self.prompter.ask_yes_no(&prompt)? {
            return self
                .prompter
                .say(render::warning(format!("\n{stored} was not deleted")));
        }
        match self.session.delete(&stored) {
            Ok(event) => self.prompter.say(render::event(&event)),
            Err(err) => self.report(&err),
        }
    }

    fn update_movie(&mut self) -> Result<()> {
        let title = self.prompter.ask_title()?;
        let Some(stored) = self.session.find(&title).map(|r| r.title.clone()) else {
            return self
                .prompter
                .say(render::error(format!("\n{title} not found in database")));
        };
        self.prompter
            .say(render::success(format!("\n{stored} found in database")))?;

        let prompt = format!("\nWhat to update in '{stored}'?\nRating/R, Year/Y, or Both/B: ");
        let field = self.prompter.ask_choice(
            &prompt,
            &[
                (&["rating", "r"][..], UpdateField::Rating),
                (&["year", "y"][..], UpdateField::Year),
                (&["both", "b"][..], UpdateField::Both),
            ],
            "Enter (Rating/R, Year/Y, or Both/B)",
        )?;

        let current_year = self.session.current_year();
        let mut patch = MoviePatch::default();
        if matches!(field, UpdateField::Rating | UpdateField::Both) {
            patch.rating = Some(self.prompter.ask_rating()?);
        }
        if matches!(field, UpdateField::Year | UpdateField::Both) {
            patch.year = Some(self.prompter.ask_year(current_year)?);
        }

        match self.session.update(&stored, patch) {
            Ok(event) => self.prompter.say(render::event(&event)),
            Err(err) => self.report(&err),
        }
    }

    fn show_stats(&mut self) -> Result<()> {
        match aggregate::summarize(self.session.catalog().iter()) {
            Some(summary) => {
                let text = render::summary(&summary);
                self.prompter.say(text)
            }
            None => self.prompter.say(render::error(NO_MOVIES)),
        }
    }

    fn random_movie(&mut self) -> Result<()> {
        let pick = self
            .session
            .catalog()
            .random_pick(&mut rand::rng())
            .map(render::random_pick);
        match pick {
            Some(text) => self.prompter.say(text),
            None => self.prompter.say(render::error(NO_MOVIES)),
        }
    }

    fn search_movie(&mut self) -> Result<()> {
        let term = self.prompter.ask("\nEnter part of movie name: ")?;
        let matches = self.session.catalog().search(&term);
        if matches.is_empty() {
            return self
                .prompter
                .say(render::error("No movies found matching your search"));
        }
        let text = render::movie_lines(&matches);
        self.prompter.say(text)
    }

    fn sorted_view(&mut self, by_rating: bool) -> Result<()> {
        let catalog = self.session.catalog();
        if catalog.is_empty() {
            return self.prompter.say(render::error(NO_MOVIES));
        }
        let (title, sorted) = if by_rating {
            (
                "\nMovies Sorted by Rating (Highest to Lowest):\n",
                sort::by_rating(catalog.iter()),
            )
        } else {
            (
                "\nMovies Sorted by Year (Newest to Oldest):\n",
                sort::by_year(catalog.iter()),
            )
        };
        let text = format!("{}\n{}", render::warning(title), render::movie_lines(&sorted));
        self.prompter.say(text)
    }

    fn generate_website(&mut self) -> Result<()> {
        let records = match self.session.stored_records() {
            Ok(records) => records,
            Err(err) => return self.report(&err),
        };
        match site::generate(&self.site, &records) {
            Ok(path) => self.prompter.say(render::success(format!(
                "\nWebsite was generated successfully: {}",
                path.display()
            ))),
            Err(err) => self.prompter.say(render::error(err)),
        }
    }

    fn report(&mut self, err: &SessionError) -> Result<()> {
        self.prompter.say(render::error(format!("\nError: {err}")))
    }
}
