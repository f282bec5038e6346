//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Departments offered by the edit form. The set is open: values outside
/// this list are accepted by the API.
pub const DEPARTMENTS: &[&str] = &["IT", "HR", "Finance", "Marketing", "Sales", "Operations"];

/// Roles offered by the edit form. Open set, same as [`DEPARTMENTS`].
pub const ROLES: &[&str] = &[
    "Manager",
    "Developer",
    "Designer",
    "Analyst",
    "Consultant",
    "Coordinator",
];

/// Employee record as served by the HTTP API
///
/// `id` is assigned by the server, or synthesized by the client store when
/// the server is unreachable. Immutable once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub salary: f64,
    pub join_date: NaiveDate,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Create payload: an [`Employee`] without an `id`
///
/// Carries the form-side validation rules; the store itself does not
/// validate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub role: String,
    #[validate(length(min = 1))]
    pub department: String,
    #[validate(range(min = 0.0))]
    pub salary: f64,
    pub join_date: NaiveDate,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl EmployeeDraft {
    /// Attach an id, producing a full [`Employee`]
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            department: self.department,
            salary: self.salary,
            join_date: self.join_date,
            is_active: self.is_active,
        }
    }
}

fn default_is_active() -> bool {
    true
}
