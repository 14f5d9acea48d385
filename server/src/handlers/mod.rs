//! HTTP handlers
//!
//! Axum request handlers for the admin page and the published feeds.

pub mod admin;
pub mod feed;

pub use admin::{delete_tag, index, refresh_feed, tag_entry};
pub use feed::get_feed;
