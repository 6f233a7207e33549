//! HTTP handlers for hubscout-api.

pub mod health;
pub mod models;
pub mod search;
