//! `SeaORM` Entity for the `feed_entries` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feed_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub feed_id: String,
    pub title: String,
    pub link: Option<String>,
    pub published_at: DateTimeUtc,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::feed_entry_tags::Entity")]
    FeedEntryTags,
}

impl Related<super::feed_entry_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeedEntryTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
