//! Staffdesk Client - employee directory client library
//!
//! Mediates between UI consumers and the employee HTTP API. The central
//! piece is [`EmployeeStore`], which owns the canonical in-memory employee
//! list, broadcasts every change to subscribers, and degrades to a fixed
//! seed dataset whenever the remote API is unreachable.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod stats;
pub mod store;

pub use api::{EmployeeApi, HttpEmployeeApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{Session, SessionError, SessionState};
pub use stats::{DashboardStats, DepartmentCount, SalaryBand, filter_by_department};
pub use store::{EmployeeStore, StoreError, seed_employees};

// Re-export shared types for convenience
pub use shared::{Employee, EmployeeDraft};
