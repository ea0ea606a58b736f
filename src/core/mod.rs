//! In-memory snapshot of the catalog and its index helpers.

/// Snapshot of all movie records with case-insensitive title lookup.
pub mod catalog;
/// Title key folding and index aliases.
pub mod indices;
