//! Route handlers
//!
//! All HTTP request handlers organized by page and endpoint.

pub mod dashboard;
pub mod health;
pub mod receiver;
pub mod root;
