//! Movie domain record, draft, and patch types.

use crate::{
    types::{round_rating, Rating, Year},
    validate::{self, Rejection},
};

/// Fully materialized, validated movie record.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    /// Display title, case preserved. Unique ignoring case.
    pub title: String,
    /// Release year.
    pub year: Year,
    /// Rating rounded to two decimals.
    pub rating: Rating,
    /// Poster location, empty when unknown.
    pub poster_url: String,
}

/// Insert payload used to create a new [`MovieRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    /// Display title.
    pub title: String,
    /// Release year.
    pub year: Year,
    /// Rating, rounded on validation.
    pub rating: Rating,
    /// Poster location, may be empty.
    pub poster_url: String,
}

impl MovieDraft {
    /// Draft without a poster, as produced by manual entry.
    pub fn manual(title: impl Into<String>, year: Year, rating: Rating) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            poster_url: String::new(),
        }
    }

    /// Checks title, year and rating against the domain rules and builds the record.
    pub fn validate(self, current_year: Year) -> Result<MovieRecord, Rejection> {
        let title = validate::title(&self.title)?.to_string();
        validate::year_value(self.year, current_year)?;
        let rating = validate::rating_value(self.rating)?;
        Ok(MovieRecord {
            title,
            year: self.year,
            rating,
            poster_url: self.poster_url.trim().to_string(),
        })
    }
}

/// Sparse update where each `Some` field overwrites the record value.
///
/// Title and poster are immutable once a record exists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoviePatch {
    /// Optional replacement release year.
    pub year: Option<Year>,
    /// Optional replacement rating.
    pub rating: Option<Rating>,
}

impl MoviePatch {
    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Validates every field that is set, rounding the rating.
    pub fn validate(self, current_year: Year) -> Result<Self, Rejection> {
        if let Some(year) = self.year {
            validate::year_value(year, current_year)?;
        }
        let rating = self.rating.map(validate::rating_value).transpose()?;
        Ok(Self {
            year: self.year,
            rating,
        })
    }

    /// Applies this patch in place to `rec`.
    pub fn apply_to(&self, rec: &mut MovieRecord) {
        if let Some(v) = self.year {
            rec.year = v;
        }
        if let Some(v) = self.rating {
            rec.rating = round_rating(v);
        }
    }

    /// The `(year, rating)` pair `rec` would have after this patch.
    pub fn resolved_for(&self, rec: &MovieRecord) -> (Year, Rating) {
        (
            self.year.unwrap_or(rec.year),
            self.rating.map(round_rating).unwrap_or(rec.rating),
        )
    }
}
