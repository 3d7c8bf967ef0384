//! Integration test utilities for the Orion API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with a real PostgreSQL and Redis behind it.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
