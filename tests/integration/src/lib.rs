//! Integration test utilities for the webhook server
//!
//! This crate provides helpers for running end-to-end tests against a real
//! server backed by PostgreSQL.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
