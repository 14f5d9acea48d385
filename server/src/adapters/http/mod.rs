//! HTTP adapters
//!
//! Retrieval of the remote feed document over HTTP(S).

pub mod feed_source;

pub use feed_source::HttpFeedSource;
