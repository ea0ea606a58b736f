//! Aggregate statistics and ordered views over the session snapshot.

/// Mean, median and extremum sets.
pub mod aggregate;
/// Descending sorts with a title tie-break.
pub mod sort;
