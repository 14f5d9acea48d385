//! Feed entry domain entity
//!
//! An item imported from the remote feed. A row is created the first time its
//! external identifier is seen and is never updated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tag;

/// Surrogate key of a stored entry
///
/// Keys are assigned in insertion order, so ordering by id is ordering by
/// import time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeedEntryId(pub i32);

impl std::fmt::Display for FeedEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored feed entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEntry {
    pub id: FeedEntryId,
    /// Identifier assigned by the remote feed, unique across the store
    pub feed_id: String,
    pub title: String,
    pub link: Option<String>,
    pub published_at: DateTime<Utc>,
    pub description: Option<String>,
}

/// Data needed to import a new entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedEntry {
    pub feed_id: String,
    pub title: String,
    pub link: Option<String>,
    /// Falls back to the import time when the source has no date
    pub published_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

/// An entry together with its tags, sorted by name
#[derive(Debug, Clone, Serialize)]
pub struct TaggedEntry {
    pub entry: FeedEntry,
    pub tags: Vec<Tag>,
}

impl TaggedEntry {
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }
}
