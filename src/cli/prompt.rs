//! Line-oriented prompting over any reader/writer pair.

use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use anyhow::Result;
use thiserror::Error;

use crate::{
    types::{Rating, Year, MIN_YEAR},
    validate::{self, Rejection},
};

use super::render;

/// Input reached end of stream; the session ends.
#[derive(Debug, Error)]
#[error("input closed")]
pub struct InputClosed;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and returns the next line, trimmed.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    /// Re-prompts until `check` accepts, printing each rejection.
    pub fn ask_valid<T, F>(&mut self, prompt: &str, check: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T, Rejection>,
    {
        loop {
            let line = self.ask(prompt)?;
            match check(&line) {
                Ok(value) => return Ok(value),
                Err(rejection) => self.say(render::error(rejection))?,
            }
        }
    }

    pub fn ask_title(&mut self) -> Result<String> {
        let title = self.ask_valid("\nEnter movie name: ", |s| {
            validate::title(s).map(validate::title_case)
        })?;
        Ok(title)
    }

    pub fn ask_year(&mut self, current_year: Year) -> Result<Year> {
        let prompt = format!("Enter release year ({MIN_YEAR}-{current_year}): ");
        self.ask_valid(&prompt, |s| validate::year_at(s, current_year))
    }

    pub fn ask_rating(&mut self) -> Result<Rating> {
        self.ask_valid("Enter movie rating (0-10): ", validate::rating)
    }

    /// Word choice such as yes/no. `options` pairs accepted tokens with a value.
    pub fn ask_choice<T: Copy>(
        &mut self,
        prompt: &str,
        options: &[(&[&str], T)],
        hint: &str,
    ) -> Result<T> {
        loop {
            let token =
                self.ask_valid(prompt, |s| validate::confirmation(s).map(str::to_lowercase))?;
            let picked = options
                .iter()
                .find(|(tokens, _)| tokens.contains(&token.as_str()))
                .map(|(_, value)| *value);
            match picked {
                Some(value) => return Ok(value),
                None => self.say(render::error(hint))?,
            }
        }
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        self.ask_choice(
            prompt,
            &[(&["yes", "y"][..], true), (&["no", "n"][..], false)],
            "Enter either (Yes/Y or No/N)",
        )
    }

    /// Numbered option among `allowed`.
    pub fn ask_number(&mut self, prompt: &str, allowed: &[u8]) -> Result<u8> {
        loop {
            let line = self.ask(prompt)?;
            match line.parse::<u8>() {
                Ok(n) if allowed.contains(&n) => return Ok(n),
                _ => {
                    let list = allowed
                        .iter()
                        .map(u8::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    let msg = format!("Invalid choice. Please enter one of {list}.");
                    self.say(render::error(msg))?;
                }
            }
        }
    }
}
