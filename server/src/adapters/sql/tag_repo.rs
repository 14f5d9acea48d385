//! SQL adapter for TagRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::entities::{FeedEntryId, Tag, TagId};
use crate::domain::ports::TagRepository;
use crate::entity::{feed_entry_tags, tags};
use crate::error::DomainError;

/// SeaORM implementation of TagRepository
pub struct SqlTagRepository {
    db: DatabaseConnection,
}

impl SqlTagRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagRepository for SqlTagRepository {
    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, DomainError> {
        let result = tags::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, DomainError> {
        let result = tags::Entity::find()
            .filter(tags::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_or_create(&self, name: &str) -> Result<Tag, DomainError> {
        if let Some(tag) = self.find_by_name(name).await? {
            return Ok(tag);
        }

        // A concurrent request may create the same name first
        let created = tags::Entity::insert(tags::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        })
        .on_conflict(OnConflict::column(tags::Column::Name).do_nothing().to_owned())
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        if created > 0 {
            tracing::debug!(tag = %name, "Created tag");
        }

        self.find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::Database(format!("Tag {:?} missing after insert", name)))
    }

    async fn attach(&self, entry_id: FeedEntryId, tag_id: TagId) -> Result<bool, DomainError> {
        let inserted = feed_entry_tags::Entity::insert(feed_entry_tags::ActiveModel {
            feed_entry_id: Set(entry_id.0),
            tag_id: Set(tag_id.0),
        })
        .on_conflict(
            OnConflict::columns([
                feed_entry_tags::Column::FeedEntryId,
                feed_entry_tags::Column::TagId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(inserted > 0)
    }

    async fn detach(&self, entry_id: FeedEntryId, tag_id: TagId) -> Result<bool, DomainError> {
        let result = feed_entry_tags::Entity::delete_many()
            .filter(feed_entry_tags::Column::FeedEntryId.eq(entry_id.0))
            .filter(feed_entry_tags::Column::TagId.eq(tag_id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn find_by_entries(
        &self,
        entry_ids: &[FeedEntryId],
    ) -> Result<HashMap<FeedEntryId, Vec<Tag>>, DomainError> {
        if entry_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids: Vec<i32> = entry_ids.iter().map(|id| id.0).collect();
        let links = feed_entry_tags::Entity::find()
            .filter(feed_entry_tags::Column::FeedEntryId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let tags_by_id: HashMap<i32, Tag> = tags::Entity::find()
            .filter(tags::Column::Id.is_in(links.iter().map(|l| l.tag_id)))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .into_iter()
            .map(|m| (m.id, m.into()))
            .collect();

        let mut by_entry: HashMap<FeedEntryId, Vec<Tag>> = HashMap::new();
        for link in links {
            if let Some(tag) = tags_by_id.get(&link.tag_id) {
                by_entry
                    .entry(FeedEntryId(link.feed_entry_id))
                    .or_default()
                    .push(tag.clone());
            }
        }
        for tags in by_entry.values_mut() {
            tags.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Ok(by_entry)
    }
}

/// Convert SeaORM model to domain entity
impl From<tags::Model> for Tag {
    fn from(model: tags::Model) -> Self {
        Tag {
            id: TagId(model.id),
            name: model.name,
        }
    }
}
