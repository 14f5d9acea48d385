//! SQL adapter for ChangeMarkerRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::ChangeMarker;
use crate::domain::ports::ChangeMarkerRepository;
use crate::entity::changes;
use crate::error::DomainError;

/// SeaORM implementation of ChangeMarkerRepository
pub struct SqlChangeMarkerRepository {
    db: DatabaseConnection,
}

impl SqlChangeMarkerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChangeMarkerRepository for SqlChangeMarkerRepository {
    async fn get(&self, id: i32) -> Result<Option<ChangeMarker>, DomainError> {
        let result = changes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn touch(&self, id: i32) -> Result<ChangeMarker, DomainError> {
        let existing = changes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let model = changes::ActiveModel {
            id: Set(id),
            updated: Set(Utc::now()),
        };

        let result = if existing.is_some() {
            model.update(&self.db).await
        } else {
            model.insert(&self.db).await
        }
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<changes::Model> for ChangeMarker {
    fn from(model: changes::Model) -> Self {
        ChangeMarker {
            id: model.id,
            updated: model.updated,
        }
    }
}
