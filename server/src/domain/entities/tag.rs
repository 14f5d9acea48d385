//! Tag domain entity
//!
//! A user-assigned label attached to stored entries (many-to-many).
//! Names are stored trimmed and lower-cased, which makes lookups
//! case-insensitive.

use serde::{Deserialize, Serialize};

/// Surrogate key of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TagId(pub i32);

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

impl Tag {
    /// Normalize user input into a stored tag name.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn normalize_name(raw: &str) -> Option<String> {
        let name = raw.trim().to_lowercase();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}
