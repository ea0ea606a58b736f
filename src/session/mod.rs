//! Write-through session over the record store and its snapshot.

/// Events describing applied mutations.
pub mod events;
/// Session handle and mutation paths.
pub mod handle;
