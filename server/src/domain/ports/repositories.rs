//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (SeaORM over SQLite or PostgreSQL).

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{ChangeMarker, FeedEntry, FeedEntryId, NewFeedEntry, Tag, TagId};
use crate::error::DomainError;

/// Repository for imported feed entries
#[async_trait]
pub trait FeedEntryRepository: Send + Sync {
    /// Find an entry by its surrogate key
    async fn find_by_id(&self, id: FeedEntryId) -> Result<Option<FeedEntry>, DomainError>;

    /// Insert, in order, every entry whose `feed_id` is not stored yet.
    ///
    /// Existing rows are left untouched. The whole batch is committed at
    /// once; on error nothing is written. Returns the number of new rows.
    async fn insert_missing(&self, entries: &[NewFeedEntry]) -> Result<usize, DomainError>;

    /// Newest entries first, optionally capped
    async fn find_recent(&self, limit: Option<u64>) -> Result<Vec<FeedEntry>, DomainError>;

    /// Newest entries carrying the given tag, optionally capped
    async fn find_recent_by_tag(
        &self,
        tag_id: TagId,
        limit: Option<u64>,
    ) -> Result<Vec<FeedEntry>, DomainError>;

    /// Total number of stored entries
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository for tags and the entry/tag association
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, DomainError>;

    /// Find a tag by an already-normalized name
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, DomainError>;

    /// Find a tag by an already-normalized name, creating it if missing
    async fn find_or_create(&self, name: &str) -> Result<Tag, DomainError>;

    /// Associate a tag with an entry. Returns false if it already was.
    async fn attach(&self, entry_id: FeedEntryId, tag_id: TagId) -> Result<bool, DomainError>;

    /// Remove an association. Returns false if there was none.
    async fn detach(&self, entry_id: FeedEntryId, tag_id: TagId) -> Result<bool, DomainError>;

    /// Tags of each given entry, sorted by name. Entries without tags are absent.
    async fn find_by_entries(
        &self,
        entry_ids: &[FeedEntryId],
    ) -> Result<HashMap<FeedEntryId, Vec<Tag>>, DomainError>;
}

/// Repository for the persisted "last changed" timestamp
#[async_trait]
pub trait ChangeMarkerRepository: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<ChangeMarker>, DomainError>;

    /// Set the marker to now, creating the row if needed
    async fn touch(&self, id: i32) -> Result<ChangeMarker, DomainError>;
}
