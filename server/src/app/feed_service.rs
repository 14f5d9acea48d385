//! Feed service
//!
//! Queries the entries to publish and loads their tags. Serialization to a
//! concrete format lives in `crate::feed::renderer`.

use std::sync::Arc;

use crate::domain::entities::{ChangeMarker, Tag, TaggedEntry, FEED_CHANGE_MARKER_ID};
use crate::domain::ports::{ChangeMarkerRepository, FeedEntryRepository, TagRepository};
use crate::error::AppError;

/// Filter applied to a published feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    /// Only entries carrying this tag (case-insensitive)
    pub tag: Option<String>,
    /// At most this many entries, newest first
    pub limit: Option<u64>,
}

/// Service that assembles published feeds
pub struct FeedService<ER, TR, CR>
where
    ER: FeedEntryRepository,
    TR: TagRepository,
    CR: ChangeMarkerRepository,
{
    entries: Arc<ER>,
    tags: Arc<TR>,
    changes: Arc<CR>,
}

impl<ER, TR, CR> FeedService<ER, TR, CR>
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

    /// Entries matching the query, newest first, each with its tags.
    ///
    /// An unknown tag yields an empty list rather than an error.
    pub async fn entries(&self, query: &FeedQuery) -> Result<Vec<TaggedEntry>, AppError> {
        let entries = match &query.tag {
            Some(raw) => {
                let Some(name) = Tag::normalize_name(raw) else {
                    return Ok(Vec::new());
                };
                match self.tags.find_by_name(&name).await? {
                    Some(tag) => {
                        self.entries
                            .find_recent_by_tag(tag.id, query.limit)
                            .await?
                    }
                    None => {
                        tracing::debug!(tag = %name, "Feed requested for unknown tag");
                        return Ok(Vec::new());
                    }
                }
            }
            None => self.entries.find_recent(query.limit).await?,
        };

        let ids: Vec<_> = entries.iter().map(|e| e.id).collect();
        let mut tags_by_entry = self.tags.find_by_entries(&ids).await?;

        Ok(entries
            .into_iter()
            .map(|entry| {
                let tags = tags_by_entry.remove(&entry.id).unwrap_or_default();
                TaggedEntry { entry, tags }
            })
            .collect())
    }

    /// Feed-level timestamp for an Atom render.
    ///
    /// Returns the stored marker (creating it when absent) and then moves the
    /// marker to now, so each render reports the time of the previous one.
    pub async fn atom_updated(&self) -> Result<ChangeMarker, AppError> {
        let current = match self.changes.get(FEED_CHANGE_MARKER_ID).await? {
            Some(marker) => marker,
            None => self.changes.touch(FEED_CHANGE_MARKER_ID).await?,
        };
        self.changes.touch(FEED_CHANGE_MARKER_ID).await?;

        Ok(current)
    }
}
