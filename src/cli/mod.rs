//! Interactive numbered-menu front end.
//!
//! [`App`] drives a [`Session`] from any line-oriented input, so the same loop
//! serves the terminal and scripted tests.

/// Menu actions and their handlers.
pub mod actions;
/// Line prompting with validation loops.
pub mod prompt;
/// Colored terminal output.
pub mod render;

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{lookup::MetadataLookup, session::handle::Session, site::SiteSettings};

use prompt::{InputClosed, Prompter};

/// Lookup attempts per add before the flow gives up.
pub const MAX_LOOKUP_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Exit,
    List,
    Add,
    Delete,
    Update,
    Stats,
    Random,
    Search,
    SortByRating,
    SortByYear,
    GenerateWebsite,
}

impl MenuAction {
    /// Parses a menu number in `0..=10`.
    pub fn from_choice(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let action = match input.parse::<u8>().ok()? {
            0 => Self::Exit,
            1 => Self::List,
            2 => Self::Add,
            3 => Self::Delete,
            4 => Self::Update,
            5 => Self::Stats,
            6 => Self::Random,
            7 => Self::Search,
            8 => Self::SortByRating,
            9 => Self::SortByYear,
            10 => Self::GenerateWebsite,
            _ => return None,
        };
        Some(action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App<R, W> {
    session: Session,
    lookup: Option<Box<dyn MetadataLookup>>,
    site: SiteSettings,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        session: Session,
        lookup: Option<Box<dyn MetadataLookup>>,
        site: SiteSettings,
        input: R,
        output: W,
    ) -> Self {
        Self {
            session,
            lookup,
            site,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.prompter.into_output())
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.prompter.say(render::banner())?;
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) if err.is::<InputClosed>() => break,
                Err(err) => return Err(err),
            }
        }
        self.prompter.say(render::warning("\nBye!"))?;
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        let action = self.choose_action()?;
        if action == MenuAction::Exit {
            return Ok(Flow::Exit);
        }
        self.dispatch(action)?;
        self.continue_or_quit()
    }

    fn choose_action(&mut self) -> Result<MenuAction> {
        loop {
            self.prompter.say(render::menu())?;
            let line = self.prompter.ask("\nEnter choice (0-10): ")?;
            match MenuAction::from_choice(&line) {
                Some(action) => return Ok(action),
                None => self
                    .prompter
                    .say(render::error("Invalid input. Enter a number (0-10)."))?,
            }
        }
    }

    fn continue_or_quit(&mut self) -> Result<Flow> {
        loop {
            let line = self
                .prompter
                .ask("\nPress 'enter' to continue or 'q' to exit: ")?
                .to_lowercase();
            match line.as_str() {
                "" => return Ok(Flow::Continue),
                "q" | "quit" => return Ok(Flow::Exit),
                _ => self
                    .prompter
                    .say(render::error("Invalid input. Press 'enter' or type 'q'."))?,
            }
        }
    }
}
