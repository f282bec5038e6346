//! Shared types for staffdesk
//!
//! Data model for the employee directory, shared between the client
//! library and any consumer that talks the same wire format.

pub mod models;

// Re-exports
pub use models::{DEPARTMENTS, Employee, EmployeeDraft, ROLES};
