//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the feed codecs.

pub mod feed_service;
pub mod fetch_service;
pub mod tag_service;

pub use feed_service::{FeedQuery, FeedService};
pub use fetch_service::{FetchReport, FetchService, FetchSettings};
pub use tag_service::TagService;
