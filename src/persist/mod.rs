pub mod sqlite;

use thiserror::Error;

use crate::{
    movie::MovieRecord,
    types::{Rating, Year},
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("movie '{0}' already exists in the store")]
    DuplicateKey(String),
    #[error("movie '{0}' does not exist in the store")]
    NotFound(String),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable table of movie rows keyed by title.
///
/// Every call is its own autocommit unit; a returned error means nothing changed.
pub trait RecordStore {
    /// All rows in insertion order.
    fn list(&self) -> StoreResult<Vec<MovieRecord>>;
    fn insert(&mut self, record: &MovieRecord) -> StoreResult<()>;
    /// Overwrites year and rating; the poster is left untouched.
    fn update(&mut self, title: &str, year: Year, rating: Rating) -> StoreResult<()>;
    fn delete(&mut self, title: &str) -> StoreResult<()>;
}
