//! Tag service
//!
//! Admin operations that attach and detach tags on stored entries.

use std::sync::Arc;

use crate::domain::entities::{FeedEntryId, Tag, TagId, FEED_CHANGE_MARKER_ID};
use crate::domain::ports::{ChangeMarkerRepository, FeedEntryRepository, TagRepository};
use crate::error::AppError;

/// Service for tagging entries
pub struct TagService<ER, TR, CR>
where
    ER: FeedEntryRepository,
    TR: TagRepository,
    CR: ChangeMarkerRepository,
{
    entries: Arc<ER>,
    tags: Arc<TR>,
    changes: Arc<CR>,
}

impl<ER, TR, CR> TagService<ER, TR, CR>
where
    ER: FeedEntryRepository,
    TR: TagRepository,
    CR: ChangeMarkerRepository,
{
    pub fn new(entries: Arc<ER>, tags: Arc<TR>, changes: Arc<CR>) -> Self {
        Self {
            entries,
            tags,
            changes,
        }
    }

    /// Tag an entry, creating the tag on first use.
    ///
    /// Re-adding a tag the entry already has only touches the change marker.
    pub async fn add_tag(&self, entry_id: FeedEntryId, raw_name: &str) -> Result<Tag, AppError> {
        let name = Tag::normalize_name(raw_name)
            .ok_or_else(|| AppError::BadRequest("Tag name must not be empty".to_string()))?;

        if self.entries.find_by_id(entry_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Entry {} not found", entry_id)));
        }

        let tag = self.tags.find_or_create(&name).await?;
        let attached = self.tags.attach(entry_id, tag.id).await?;
        self.changes.touch(FEED_CHANGE_MARKER_ID).await?;

        tracing::info!(entry = %entry_id, tag = %tag.name, attached, "Tagged entry");
        Ok(tag)
    }

    /// Remove a tag from an entry. The tag itself is kept.
    ///
    /// Returns whether an association was removed.
    pub async fn remove_tag(&self, entry_id: FeedEntryId, tag_id: TagId) -> Result<bool, AppError> {
        if self.entries.find_by_id(entry_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Entry {} not found", entry_id)));
        }
        if self.tags.find_by_id(tag_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Tag {} not found", tag_id)));
        }

        let removed = self.tags.detach(entry_id, tag_id).await?;
        if removed {
            self.changes.touch(FEED_CHANGE_MARKER_ID).await?;
            tracing::info!(entry = %entry_id, tag = %tag_id, "Removed tag from entry");
        } else {
            tracing::debug!(entry = %entry_id, tag = %tag_id, "Tag was not attached to entry");
        }

        Ok(removed)
    }
}
