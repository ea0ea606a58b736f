//! SQLite-backed movie table.

use std::path::Path;

use rusqlite::{params, Connection, ErrorCode};
use tracing::{debug, warn};

use crate::{
    movie::MovieRecord,
    types::{round_rating, Rating, Year},
};

use super::{RecordStore, StoreError, StoreResult};

/// SQLite implementation of [`crate::persist::RecordStore`].
pub struct SqliteRecordStore {
    conn: Connection,
}

impl SqliteRecordStore {
    /// Opens or creates a movie database at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        let _mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }

    /// Number of stored rows.
    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl RecordStore for SqliteRecordStore {
    fn list(&self) -> StoreResult<Vec<MovieRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, year, rating, poster_url FROM movies ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok(MovieRecord {
                title: row.get(0)?,
                year: row.get(1)?,
                rating: row.get(2)?,
                poster_url: row.get(3)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn insert(&mut self, record: &MovieRecord) -> StoreResult<()> {
        let res = self.conn.execute(
            "INSERT INTO movies (title, year, rating, poster_url) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.title,
                record.year,
                round_rating(record.rating),
                record.poster_url
            ],
        );
        match res {
            Ok(_) => {
                debug!("Inserted movie '{}'", record.title);
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                warn!("Insert rejected, '{}' already stored", record.title);
                Err(StoreError::DuplicateKey(record.title.clone()))
            }
            Err(err) => {
                warn!("Insert of '{}' failed: {}", record.title, err);
                Err(err.into())
            }
        }
    }

    fn update(&mut self, title: &str, year: Year, rating: Rating) -> StoreResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE movies SET year = ?1, rating = ?2 WHERE title = ?3",
                params![year, round_rating(rating), title],
            )
            .inspect_err(|err| warn!("Update of '{}' failed: {}", title, err))?;
        if changed == 0 {
            warn!("Update skipped, '{}' not stored", title);
            return Err(StoreError::NotFound(title.to_string()));
        }
        debug!("Updated movie '{}'", title);
        Ok(())
    }

    fn delete(&mut self, title: &str) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM movies WHERE title = ?1", params![title])
            .inspect_err(|err| warn!("Delete of '{}' failed: {}", title, err))?;
        if changed == 0 {
            warn!("Delete skipped, '{}' not stored", title);
            return Err(StoreError::NotFound(title.to_string()));
        }
        debug!("Deleted movie '{}'", title);
        Ok(())
    }
}
