//! Change marker
//!
//! A single persisted timestamp that feeds the Atom `<updated>` element.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Fixed key of the marker row used by the published feed
pub const FEED_CHANGE_MARKER_ID: i32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeMarker {
    pub id: i32,
    pub updated: DateTime<Utc>,
}

impl ChangeMarker {
    /// RFC 3339 timestamp with a `Z` suffix, as Atom expects
    pub fn rfc3339(&self) -> String {
        self.updated.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
