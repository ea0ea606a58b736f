use thiserror::Error;
use tracing::{info, warn};

use crate::{
    core::catalog::{CatalogError, MovieCatalog},
    movie::{MovieDraft, MoviePatch, MovieRecord},
    persist::{RecordStore, StoreError},
    types::{current_year, Year},
    validate::Rejection,
};

use super::events::SessionEvent;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] Rejection),
    #[error("{0} already exists in database")]
    Duplicate(String),
    #[error("{0} not found in database")]
    NotFound(String),
    #[error("nothing to update")]
    EmptyPatch,
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    #[error("snapshot error: {0}")]
    Snapshot(#[from] CatalogError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Owns the store connection and the in-memory snapshot.
///
/// Mutations validate first, persist second, and touch the snapshot only after
/// the store accepted the write.
pub struct Session {
    store: Box<dyn RecordStore>,
    catalog: MovieCatalog,
    current_year: Year,
}

impl Session {
    /// Loads the snapshot from `store`. Read errors are returned as is.
    pub fn open(store: Box<dyn RecordStore>) -> SessionResult<Self> {
        let records = store.list()?;
        let catalog = MovieCatalog::from_records(records)?;
        info!("Loaded {} movies", catalog.len());
        Ok(Self {
            store,
            catalog,
            current_year: current_year(),
        })
    }

    /// Overrides the upper bound used for year validation.
    pub fn with_current_year(mut self, year: Year) -> Self {
        self.current_year = year;
        self
    }

    pub fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    pub fn current_year(&self) -> Year {
        self.current_year
    }

    /// Persisted rows, read fresh from the store.
    pub fn stored_records(&self) -> SessionResult<Vec<MovieRecord>> {
        Ok(self.store.list()?)
    }

    /// Case-insensitive lookup in the snapshot.
    pub fn find(&self, title: &str) -> Option<&MovieRecord> {
        self.catalog.get(title)
    }

    pub fn add(&mut self, draft: MovieDraft) -> SessionResult<SessionEvent> {
        let record = draft.validate(self.current_year)?;
        if let Some(existing) = self.catalog.get(&record.title) {
            return Err(SessionError::Duplicate(existing.title.clone()));
        }

        self.store.insert(&record).inspect_err(log_store_failure)?;

        let title = record.title.clone();
        self.catalog.insert(record)?;
        info!("Added '{}'", title);
        Ok(SessionEvent::Added { title })
    }

    pub fn delete(&mut self, title: &str) -> SessionResult<SessionEvent> {
        let stored = self
            .catalog
            .get(title)
            .map(|r| r.title.clone())
            .ok_or_else(|| SessionError::NotFound(title.trim().to_string()))?;

        self.store.delete(&stored).inspect_err(log_store_failure)?;

        self.catalog.remove(&stored)?;
        info!("Deleted '{}'", stored);
        Ok(SessionEvent::Deleted { title: stored })
    }

    pub fn update(&mut self, title: &str, patch: MoviePatch) -> SessionResult<SessionEvent> {
        if patch.is_empty() {
            return Err(SessionError::EmptyPatch);
        }
        let patch = patch.validate(self.current_year)?;
        let current = self
            .catalog
            .get(title)
            .ok_or_else(|| SessionError::NotFound(title.trim().to_string()))?;
        let stored = current.title.clone();
        let (year, rating) = patch.resolved_for(current);

        self.store
            .update(&stored, year, rating)
            .inspect_err(log_store_failure)?;

        self.catalog.patch(&stored, &patch)?;
        info!("Updated '{}'", stored);
        Ok(SessionEvent::Updated {
            title: stored,
            year: patch.year.is_some(),
            rating: patch.rating.is_some(),
        })
    }
}

fn log_store_failure(err: &StoreError) {
    warn!("Store rejected mutation, snapshot left unchanged: {}", err);
}
