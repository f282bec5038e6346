//! Data models
//!
//! Shared between the client library and the HTTP API.
//! Field names are camelCase on the wire (`joinDate`, `isActive`).
//! All IDs are `i64`.

pub mod employee;

// Re-exports
pub use employee::*;
