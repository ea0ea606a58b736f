//! Personal movie catalog backed by a single SQLite table.
//!
//! A [`session::handle::Session`] owns the record store and an in-memory
//! snapshot; every mutation is validated, persisted, and only then applied to
//! the snapshot. Statistics, search and sorted views read the snapshot.
//!
//! # Examples
//!
//! ```
//! use movielog::{
//!     movie::{MovieDraft, MoviePatch},
//!     persist::sqlite::SqliteRecordStore,
//!     session::handle::Session,
//!     stats::{aggregate, sort},
//! };
//!
//! let store = SqliteRecordStore::open_in_memory().expect("open sqlite");
//! let mut session = Session::open(Box::new(store)).expect("load snapshot");
//!
//! session.add(MovieDraft::manual("The Matrix", 1999, 8.7)).expect("add");
//! session.add(MovieDraft::manual("Heat", 1995, 8.3)).expect("add");
//! session
//!     .update("the matrix", MoviePatch { rating: Some(9.0), ..MoviePatch::default() })
//!     .expect("update");
//!
//! let summary = aggregate::summarize(session.catalog().iter()).expect("non-empty");
//! assert_eq!(summary.best.movies[0].title, "The Matrix");
//!
//! let newest = sort::by_year(session.catalog().iter());
//! assert_eq!(newest[0].year, 1999);
//! ```

/// Interactive menu front end.
pub mod cli;
/// Configuration from CLI arguments and TOML.
pub mod config;
/// In-memory snapshot and index helpers.
pub mod core;
/// Metadata lookup abstraction and OMDb client.
pub mod lookup;
/// Movie domain records and patches.
pub mod movie;
/// Record store abstraction and SQLite implementation.
pub mod persist;
/// Write-through session and its events.
pub mod session;
/// Static HTML page generation.
pub mod site;
/// Aggregate statistics and sorted views.
pub mod stats;
/// Shared primitive types and bounds.
pub mod types;
/// Input validators.
pub mod validate;
