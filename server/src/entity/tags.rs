//! `SeaORM` Entity for the `tags` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
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
