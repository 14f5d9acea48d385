//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for feed entries, tags and the change marker
//! - `ports`: Trait definitions for storage and the remote feed source

pub mod entities;
pub mod ports;
