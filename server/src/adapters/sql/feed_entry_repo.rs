//! SQL adapter for FeedEntryRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::domain::entities::{FeedEntry, FeedEntryId, NewFeedEntry, TagId};
use crate::domain::ports::FeedEntryRepository;
use crate::entity::{feed_entries, feed_entry_tags};
use crate::error::DomainError;

/// Largest LIMIT both backends bind without overflow (a signed 64-bit value)
const MAX_LIMIT: u64 = i64::MAX as u64;

/// SeaORM implementation of FeedEntryRepository
pub struct SqlFeedEntryRepository {
    db: DatabaseConnection,
}

impl SqlFeedEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeedEntryRepository for SqlFeedEntryRepository {
    async fn find_by_id(&self, id: FeedEntryId) -> Result<Option<FeedEntry>, DomainError> {
        let result = feed_entries::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn insert_missing(&self, entries: &[NewFeedEntry]) -> Result<usize, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut inserted = 0;
        for entry in entries {
            // Earlier inserts of this batch are visible inside the transaction,
            // which also dedupes repeated ids within one document.
            let existing = feed_entries::Entity::find()
                .filter(feed_entries::Column::FeedId.eq(entry.feed_id.as_str()))
                .one(&txn)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;

            if existing.is_some() {
                continue;
            }

            feed_entries::ActiveModel {
                feed_id: Set(entry.feed_id.clone()),
                title: Set(entry.title.clone()),
                link: Set(entry.link.clone()),
                published_at: Set(entry.published_at.unwrap_or_else(Utc::now)),
                description: Set(entry.description.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

            inserted += 1;
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(inserted)
    }

    async fn find_recent(&self, limit: Option<u64>) -> Result<Vec<FeedEntry>, DomainError> {
        let mut query = feed_entries::Entity::find().order_by_desc(feed_entries::Column::Id);
        if let Some(limit) = limit {
            query = query.limit(limit.min(MAX_LIMIT));
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_recent_by_tag(
        &self,
        tag_id: TagId,
        limit: Option<u64>,
    ) -> Result<Vec<FeedEntry>, DomainError> {
        let entry_ids: Vec<i32> = feed_entry_tags::Entity::find()
            .filter(feed_entry_tags::Column::TagId.eq(tag_id.0))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .into_iter()
            .map(|link| link.feed_entry_id)
            .collect();

        if entry_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = feed_entries::Entity::find()
            .filter(feed_entries::Column::Id.is_in(entry_ids))
            .order_by_desc(feed_entries::Column::Id);
        if let Some(limit) = limit {
            query = query.limit(limit.min(MAX_LIMIT));
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        feed_entries::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

/// Convert SeaORM model to domain entity
impl From<feed_entries::Model> for FeedEntry {
    fn from(model: feed_entries::Model) -> Self {
        FeedEntry {
            id: FeedEntryId(model.id),
            feed_id: model.feed_id,
            title: model.title,
            link: model.link,
            published_at: model.published_at,
            description: model.description,
        }
    }
}
