use rand::{seq::IndexedRandom, Rng};
use thiserror::Error;

use crate::movie::{MoviePatch, MovieRecord};

use super::indices::{title_key, TitleIndex, TitleKey};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("movie '{0}' is not in the catalog")]
    MissingMovie(String),
    #[error("movie '{0}' already exists in the catalog")]
    AlreadyExists(String),
}

/// Session snapshot of every stored movie.
///
/// Titles are keyed case-insensitively; iteration follows the order in which
/// records were loaded or inserted.
#[derive(Debug, Default, Clone)]
pub struct MovieCatalog {
    records: TitleIndex,
    order: Vec<TitleKey>,
}

impl MovieCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<MovieRecord>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for rec in records {
            catalog.insert(rec)?;
        }
        Ok(catalog)
    }

    pub fn export_snapshot(&self) -> Vec<MovieRecord> {
        self.iter().cloned().collect()
    }

    pub fn insert(&mut self, rec: MovieRecord) -> Result<(), CatalogError> {
        let key = title_key(&rec.title);
        if let Some(existing) = self.records.get(&key) {
            return Err(CatalogError::AlreadyExists(existing.title.clone()));
        }
        self.order.push(key.clone());
        self.records.insert(key, rec);
        Ok(())
    }

    pub fn remove(&mut self, title: &str) -> Result<MovieRecord, CatalogError> {
        let key = title_key(title);
        let rec = self
            .records
            .remove(&key)
            .ok_or_else(|| CatalogError::MissingMovie(title.to_string()))?;
        if let Some(pos) = self.order.iter().position(|k| *k == key) {
            self.order.remove(pos);
        }
        Ok(rec)
    }

    pub fn patch(&mut self, title: &str, patch: &MoviePatch) -> Result<&MovieRecord, CatalogError> {
        let rec = self
            .records
            .get_mut(&title_key(title))
            .ok_or_else(|| CatalogError::MissingMovie(title.to_string()))?;
        patch.apply_to(rec);
        Ok(rec)
    }

    /// Case-insensitive lookup.
    pub fn get(&self, title: &str) -> Option<&MovieRecord> {
        self.records.get(&title_key(title))
    }

    pub fn contains(&self, title: &str) -> bool {
        self.records.contains_key(&title_key(title))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn records(&self) -> Vec<&MovieRecord> {
        self.iter().collect()
    }

    /// Records whose title contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&MovieRecord> {
        let needle = term.trim().to_lowercase();
        self.iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Uniformly random record, `None` when the catalog is empty.
    pub fn random_pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&MovieRecord> {
        self.order
            .choose(rng)
            .and_then(|key| self.records.get(key))
    }
}
