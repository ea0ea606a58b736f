//! Title-to-metadata resolution against an external catalog.

/// OMDb HTTP client.
pub mod omdb;

use thiserror::Error;

use crate::{
    movie::MovieDraft,
    types::{Rating, Year},
};

/// Normalized details for a title found by the lookup source.
///
/// Missing numeric fields are `0`; a missing poster is an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupMatch {
    pub title: String,
    pub year: Year,
    pub rating: Rating,
    pub poster_url: String,
}

impl LookupMatch {
    /// Human-readable notes about fields the source did not provide.
    pub fn data_warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.year == 0 {
            warnings.push("Year information missing");
        }
        if self.rating == 0.0 {
            warnings.push("Rating information missing");
        }
        if self.poster_url.is_empty() {
            warnings.push("Poster not available");
        }
        warnings
    }

    pub fn into_draft(self) -> MovieDraft {
        MovieDraft {
            title: self.title,
            year: self.year,
            rating: self.rating,
            poster_url: self.poster_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(LookupMatch),
    /// The source answered but has no such title.
    NotFound { reason: String },
}

/// Transient failure; the caller decides whether to retry.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("lookup service answered with status {0}")]
    Status(u16),
    #[error("could not parse lookup response: {0}")]
    Parse(#[from] serde_json::Error),
}

pub trait MetadataLookup {
    /// Resolves `title`. Never retries internally.
    fn lookup(&self, title: &str) -> Result<LookupOutcome, LookupError>;
}
