//! Schema bootstrap
//!
//! Creates any missing table from the SeaORM entity definitions. There is no
//! migration history: existing tables are left as they are.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::{changes, feed_entries, feed_entry_tags, tags};

pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // Parents before the join table so foreign keys resolve
    let statements = [
        schema.create_table_from_entity(feed_entries::Entity),
        schema.create_table_from_entity(tags::Entity),
        schema.create_table_from_entity(feed_entry_tags::Entity),
        schema.create_table_from_entity(changes::Entity),
    ];

    for mut statement in statements {
        statement.if_not_exists();
        db.execute(backend.build(&statement)).await?;
    }

    tracing::debug!("Database schema ready");
    Ok(())
}
