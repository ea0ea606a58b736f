//! Mutation outcomes reported to the presentation layer.

/// Emitted after a mutation reached the store and the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A new movie was stored.
    Added {
        /// Stored title.
        title: String,
    },
    /// A movie was removed.
    Deleted {
        /// Title as it was stored.
        title: String,
    },
    /// Year and/or rating were overwritten.
    Updated {
        /// Title as it is stored.
        title: String,
        /// True when the year was part of the update.
        year: bool,
        /// True when the rating was part of the update.
        rating: bool,
    },
}
