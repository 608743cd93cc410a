//! Commit model
//!
//! A `CommitInfo` is the slice of a git commit the standup generator cares
//! about: identity, author, message, and when it was committed.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A single commit within the reporting window
#[derive(Debug, Clone, Serialize)]
pub struct CommitInfo {
    /// Abbreviated hash (first 7 hex characters)
    pub short_hash: String,

    /// Full commit hash
    pub hash: String,

    /// Full commit message, trimmed
    pub message: String,

    /// Author name
    pub author: String,

    /// Author email
    pub email: String,

    /// Committer timestamp, in the committer's own UTC offset
    pub timestamp: DateTime<FixedOffset>,
}

impl CommitInfo {
    /// Committer time formatted for the activity table (`YYYY-MM-DD HH:MM`)
    #[must_use]
    pub fn format_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }
}
