//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. SQLite is the default
//! backend; PostgreSQL works through the same code via `DATABASE_URL`.

pub mod change_marker_repo;
pub mod feed_entry_repo;
pub mod schema;
pub mod tag_repo;


pub use change_marker_repo::SqlChangeMarkerRepository;
pub use feed_entry_repo::SqlFeedEntryRepository;
pub use schema::create_tables;
pub use tag_repo::SqlTagRepository;
