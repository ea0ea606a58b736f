//! Input validators for titles, years, ratings, and confirmation tokens.
//!
//! Every validator is pure: it either returns the accepted value or a
//! [`Rejection`] whose `Display` is the message shown to the user. Callers
//! re-prompt until a validator accepts.

use thiserror::Error;

use crate::types::{current_year, rating_in_range, round_rating, year_in_range, Rating, Year, MIN_YEAR};

/// Characters never accepted in years or confirmation tokens.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>/?\\";
/// Ratings may carry a sign and a decimal point, so `-` and `.` are allowed there.
pub const RATING_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_=+[]{}|;:'\",<>/?\\";
/// Minimum query length accepted by the metadata lookup.
pub const MIN_LOOKUP_QUERY_LEN: usize = 2;

/// Reason an input was not accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// Title was empty.
    #[error("movie name cannot be empty")]
    EmptyTitle,
    /// Title had no letter or digit.
    #[error("titles consisting of symbols only are not allowed")]
    SymbolOnlyTitle,
    /// Year was empty or not exactly four digits.
    #[error("enter a 4-digit year between {min} and {max}")]
    YearFormat {
        /// Lower bound.
        min: Year,
        /// Upper bound at validation time.
        max: Year,
    },
    /// Year contained punctuation.
    #[error("year cannot contain special characters")]
    YearSpecialCharacters,
    /// Year outside the accepted range.
    #[error("year should be between {min} and {max}, got {year}")]
    YearOutOfRange {
        /// Rejected year.
        year: Year,
        /// Lower bound.
        min: Year,
        /// Upper bound at validation time.
        max: Year,
    },
    /// Rating was empty.
    #[error("enter a value between 0-10 (e.g., 8.5)")]
    EmptyRating,
    /// Rating contained punctuation.
    #[error("rating contains special characters")]
    RatingSpecialCharacters,
    /// Rating did not parse as a number.
    #[error("invalid input, enter a number (e.g., 8.5)")]
    RatingNotNumber,
    /// Rating outside `[0, 10]`.
    #[error("invalid range, enter a rating between 0 and 10")]
    RatingOutOfRange,
    /// Confirmation was empty.
    #[error("input cannot be empty")]
    EmptyInput,
    /// Confirmation was only symbols.
    #[error("only symbols are not allowed")]
    SymbolOnlyInput,
    /// Confirmation was only digits.
    #[error("only digits are not allowed")]
    DigitOnlyInput,
    /// Confirmation contained punctuation.
    #[error("special characters are not allowed")]
    InputSpecialCharacters,
    /// Lookup query was empty.
    #[error("movie title cannot be empty")]
    EmptyQuery,
    /// Lookup query was too short.
    #[error("title too short, enter at least 2 characters")]
    QueryTooShort,
}

fn has_any(input: &str, set: &str) -> bool {
    input.chars().any(|c| set.contains(c))
}

/// Accepts a non-empty title containing at least one alphanumeric character.
pub fn title(input: &str) -> Result<&str, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Rejection::EmptyTitle);
    }
    if !input.chars().any(char::is_alphanumeric) {
        return Err(Rejection::SymbolOnlyTitle);
    }
    Ok(input)
}

/// Upper-cases the first character of every whitespace-separated word.
///
/// The rest of each word is left alone so titles like `WALL-E` keep their casing.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Accepts a four-digit year in `[MIN_YEAR, current year]`.
pub fn year(input: &str) -> Result<Year, Rejection> {
    year_at(input, current_year())
}

/// Same as [`year`] with an explicit upper bound.
pub fn year_at(input: &str, current_year: Year) -> Result<Year, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Rejection::YearFormat { min: MIN_YEAR, max: current_year });
    }
    if has_any(input, SPECIAL_CHARACTERS) {
        return Err(Rejection::YearSpecialCharacters);
    }
    if input.len() != 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::YearFormat { min: MIN_YEAR, max: current_year });
    }
    let value: Year = input
        .parse()
        .map_err(|_| Rejection::YearFormat { min: MIN_YEAR, max: current_year })?;
    year_value(value, current_year)?;
    Ok(value)
}

/// Range check for an already numeric year.
pub fn year_value(year: Year, current_year: Year) -> Result<(), Rejection> {
    if year_in_range(year, current_year) {
        Ok(())
    } else {
        Err(Rejection::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: current_year,
        })
    }
}

/// Accepts a number in `[0, 10]`, rounded to two decimals.
pub fn rating(input: &str) -> Result<Rating, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Rejection::EmptyRating);
    }
    if has_any(input, RATING_SPECIAL_CHARACTERS) {
        return Err(Rejection::RatingSpecialCharacters);
    }
    let value: Rating = input.parse().map_err(|_| Rejection::RatingNotNumber)?;
    rating_value(value)
}

/// Range check for an already numeric rating. Returns the rounded value.
pub fn rating_value(rating: Rating) -> Result<Rating, Rejection> {
    if rating_in_range(rating) {
        Ok(round_rating(rating))
    } else {
        Err(Rejection::RatingOutOfRange)
    }
}

/// Accepts word-like tokens such as `yes`, `n`, or `both`.
pub fn confirmation(input: &str) -> Result<&str, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Rejection::EmptyInput);
    }
    if !input.chars().any(char::is_alphanumeric) {
        return Err(Rejection::SymbolOnlyInput);
    }
    if input.chars().all(|c| c.is_ascii_digit()) {
        return Err(Rejection::DigitOnlyInput);
    }
    if has_any(input, SPECIAL_CHARACTERS) {
        return Err(Rejection::InputSpecialCharacters);
    }
    Ok(input)
}

/// Accepts a metadata lookup query of at least [`MIN_LOOKUP_QUERY_LEN`] characters.
pub fn lookup_query(input: &str) -> Result<&str, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Rejection::EmptyQuery);
    }
    if input.chars().count() < MIN_LOOKUP_QUERY_LEN {
        return Err(Rejection::QueryTooShort);
    }
    Ok(input)
}
