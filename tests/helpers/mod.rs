//! Test helpers module
//!
//! Shared setup for the integration tests: an in-memory test context,
//! a store double that fails on demand, fixture data and the PostgreSQL
//! test database.

#![allow(dead_code)]

pub mod database_helper;
pub mod failing_store;
pub mod test_context;
pub mod test_data;

pub use database_helper::*;
pub use failing_store::*;
pub use test_context::*;
pub use test_data::*;
