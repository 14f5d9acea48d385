//! Domain entities
//!
//! Pure domain models for the re-published feed.
//! These are separate from the SeaORM table models in the `entity` module.

pub mod change_marker;
pub mod feed_entry;
pub mod tag;

pub use change_marker::{ChangeMarker, FEED_CHANGE_MARKER_ID};
pub use feed_entry::{FeedEntry, FeedEntryId, NewFeedEntry, TaggedEntry};
pub use tag::{Tag, TagId};
