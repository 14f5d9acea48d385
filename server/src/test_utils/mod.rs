//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks are plain in-memory implementations of the port traits, so
//! services can be exercised without a database or network. SQL adapters
//! are tested separately against in-memory SQLite (`fixtures::test_db`).

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
