//! SeaORM table models
//!
//! One module per table. Schema bootstrap derives the tables from these
//! definitions (see `adapters::sql::schema`).

pub mod changes;
pub mod feed_entries;
pub mod feed_entry_tags;
pub mod tags;
