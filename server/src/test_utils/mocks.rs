//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{
    ChangeMarker, FeedEntry, FeedEntryId, NewFeedEntry, Tag, TagId,
};
use crate::domain::ports::{
    ChangeMarkerRepository, FeedEntryRepository, FeedSource, TagRepository,
};
use crate::error::{DomainError, FetchError};

/// Entry/tag associations, shared between the entry and tag mocks
pub type TagLinks = Arc<RwLock<BTreeSet<(FeedEntryId, TagId)>>>;

// ============================================================================
// In-Memory Feed Entry Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryFeedEntryRepository {
    entries: Arc<RwLock<Vec<FeedEntry>>>,
    links: TagLinks,
}

impl InMemoryFeedEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the associations of an `InMemoryTagRepository` for tag filtering
    pub fn with_tag_links(mut self, links: TagLinks) -> Self {
        self.links = links;
        self
    }

    /// Pre-populate, assigning ids in order starting after the last one
    pub fn with_entries(self, entries: Vec<NewFeedEntry>) -> Self {
        {
            let mut stored = self.entries.write().unwrap();
            for entry in entries {
                let id = FeedEntryId(stored.len() as i32 + 1);
                stored.push(to_stored(id, &entry));
            }
        }
        self
    }

    /// Snapshot of every stored entry in insertion order
    pub fn all(&self) -> Vec<FeedEntry> {
        self.entries.read().unwrap().clone()
    }
}

fn to_stored(id: FeedEntryId, entry: &NewFeedEntry) -> FeedEntry {
    FeedEntry {
        id,
        feed_id: entry.feed_id.clone(),
        title: entry.title.clone(),
        link: entry.link.clone(),
        published_at: entry.published_at.unwrap_or_else(Utc::now),
        description: entry.description.clone(),
    }
}

fn newest_first(mut entries: Vec<FeedEntry>, limit: Option<u64>) -> Vec<FeedEntry> {
    entries.sort_by(|a, b| b.id.cmp(&a.id));
    if let Some(limit) = limit {
        entries.truncate(limit as usize);
    }
    entries
}

#[async_trait]
impl FeedEntryRepository for InMemoryFeedEntryRepository {
    async fn find_by_id(&self, id: FeedEntryId) -> Result<Option<FeedEntry>, DomainError> {
        let entries = self.entries.read().unwrap();
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    async fn insert_missing(&self, entries: &[NewFeedEntry]) -> Result<usize, DomainError> {
        let mut stored = self.entries.write().unwrap();
        let mut inserted = 0;
        for entry in entries {
            if stored.iter().any(|e| e.feed_id == entry.feed_id) {
                continue;
            }
            let id = FeedEntryId(stored.len() as i32 + 1);
            stored.push(to_stored(id, entry));
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn find_recent(&self, limit: Option<u64>) -> Result<Vec<FeedEntry>, DomainError> {
        Ok(newest_first(self.all(), limit))
    }

    async fn find_recent_by_tag(
        &self,
        tag_id: TagId,
        limit: Option<u64>,
    ) -> Result<Vec<FeedEntry>, DomainError> {
        let links = self.links.read().unwrap();
        let tagged = self
            .all()
            .into_iter()
            .filter(|e| links.contains(&(e.id, tag_id)))
            .collect();
        Ok(newest_first(tagged, limit))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.entries.read().unwrap().len() as u64)
    }
}

// ============================================================================
// In-Memory Tag Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTagRepository {
    tags: Arc<RwLock<HashMap<TagId, Tag>>>,
    links: TagLinks,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a tag for testing
    pub fn with_tag(self, tag: Tag) -> Self {
        self.tags.write().unwrap().insert(tag.id, tag);
        self
    }

    /// Pre-populate with an association
    pub fn with_link(self, entry_id: FeedEntryId, tag_id: TagId) -> Self {
        self.links.write().unwrap().insert((entry_id, tag_id));
        self
    }

    /// Handle to the associations, see `InMemoryFeedEntryRepository::with_tag_links`
    pub fn links(&self) -> TagLinks {
        self.links.clone()
    }

    /// Names of the tags on an entry, sorted
    pub fn tags_of(&self, entry_id: FeedEntryId) -> Vec<String> {
        let tags = self.tags.read().unwrap();
        let mut names: Vec<String> = self
            .links
            .read()
            .unwrap()
            .iter()
            .filter(|(e, _)| *e == entry_id)
            .filter_map(|(_, t)| tags.get(t).map(|tag| tag.name.clone()))
            .collect();
        names.sort();
        names
    }

    pub fn tag_count(&self) -> usize {
        self.tags.read().unwrap().len()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, DomainError> {
        Ok(self.tags.read().unwrap().get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, DomainError> {
        let tags = self.tags.read().unwrap();
        Ok(tags.values().find(|t| t.name == name).cloned())
    }

    async fn find_or_create(&self, name: &str) -> Result<Tag, DomainError> {
        let mut tags = self.tags.write().unwrap();
        if let Some(tag) = tags.values().find(|t| t.name == name) {
            return Ok(tag.clone());
        }

        let next_id = tags.keys().map(|id| id.0).max().unwrap_or(0) + 1;
        let tag = Tag {
            id: TagId(next_id),
            name: name.to_string(),
        };
        tags.insert(tag.id, tag.clone());
        Ok(tag)
    }

    async fn attach(&self, entry_id: FeedEntryId, tag_id: TagId) -> Result<bool, DomainError> {
        Ok(self.links.write().unwrap().insert((entry_id, tag_id)))
    }

    async fn detach(&self, entry_id: FeedEntryId, tag_id: TagId) -> Result<bool, DomainError> {
        Ok(self.links.write().unwrap().remove(&(entry_id, tag_id)))
    }

    async fn find_by_entries(
        &self,
        entry_ids: &[FeedEntryId],
    ) -> Result<HashMap<FeedEntryId, Vec<Tag>>, DomainError> {
        let tags = self.tags.read().unwrap();
        let links = self.links.read().unwrap();

        let mut by_entry: HashMap<FeedEntryId, Vec<Tag>> = HashMap::new();
        for (entry_id, tag_id) in links.iter() {
            if !entry_ids.contains(entry_id) {
                continue;
            }
            if let Some(tag) = tags.get(tag_id) {
                by_entry.entry(*entry_id).or_default().push(tag.clone());
            }
        }
        for tags in by_entry.values_mut() {
            tags.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(by_entry)
    }
}

// ============================================================================
// In-Memory Change Marker Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryChangeMarkerRepository {
    markers: Arc<RwLock<HashMap<i32, ChangeMarker>>>,
}

impl InMemoryChangeMarkerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(self, marker: ChangeMarker) -> Self {
        self.markers.write().unwrap().insert(marker.id, marker);
        self
    }
}

#[async_trait]
impl ChangeMarkerRepository for InMemoryChangeMarkerRepository {
    async fn get(&self, id: i32) -> Result<Option<ChangeMarker>, DomainError> {
        Ok(self.markers.read().unwrap().get(&id).cloned())
    }

    async fn touch(&self, id: i32) -> Result<ChangeMarker, DomainError> {
        let marker = ChangeMarker {
            id,
            updated: Utc::now(),
        };
        self.markers.write().unwrap().insert(id, marker.clone());
        Ok(marker)
    }
}

// ============================================================================
// Mock Feed Source
// ============================================================================

/// Serves a fixed document, or fails every request with a status code
pub struct MockFeedSource {
    body: Vec<u8>,
    fail_status: Option<u16>,
    requested: Mutex<Vec<String>>,
}

impl MockFeedSource {
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            fail_status: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self {
            body: Vec::new(),
            fail_status: Some(status),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// URLs fetched so far
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.fail_status {
            Some(status) => Err(FetchError::HttpStatus(status)),
            None => Ok(self.body.clone()),
        }
    }
}
