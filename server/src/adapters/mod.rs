//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod sql;

pub use http::HttpFeedSource;
pub use sql::{
    create_tables, SqlChangeMarkerRepository, SqlFeedEntryRepository, SqlTagRepository,
};
