//! EmployeeStore - canonical in-memory employee list with change broadcast
//!
//! The store mediates between UI consumers and the remote employee API.
//! Every mutation is a remote call followed by at most one reconciliation
//! of the in-memory list, which is then published to all subscribers.
//!
//! When a remote call fails (network error or non-2xx), the store degrades
//! to its seed dataset instead of surfacing the error:
//! - `load` serves the seed list as the new source of truth
//! - `create` synthesizes the next id and appends locally
//! - `update`/`get_by_id` consult the seed set, failing only with
//!   [`StoreError::NotFound`] when the id is absent there too
//! - `delete` removes locally and always reports success
//!
//! The seed set itself is mutated by fallback `create`/`update`/`delete`,
//! so repeated offline operation stays consistent across reloads.
//!
//! The store is the single writer of the list; the seed mutex is never held
//! across an `await`.

mod seed;

pub use seed::seed_employees;

use crate::api::EmployeeApi;
use shared::{Employee, EmployeeDraft};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::watch;

/// Store error type
///
/// The only error a store operation surfaces. Transport failures are
/// absorbed by the fallback paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("employee {0} not found")]
    NotFound(i64),
}

/// Reactive employee store
///
/// Construct with [`EmployeeStore::new`], which performs the initial load.
/// Subscribers obtained from [`subscribe`](Self::subscribe) observe the
/// latest published list immediately and every later publication.
pub struct EmployeeStore {
    api: Arc<dyn EmployeeApi>,
    seed: Mutex<Vec<Employee>>,
    changes: watch::Sender<Vec<Employee>>,
}

impl EmployeeStore {
    /// Create a store and perform the initial load
    pub async fn new(api: Arc<dyn EmployeeApi>) -> Self {
        let store = Self::with_seed(api, seed::seed_employees());
        store.load().await;
        store
    }

    /// Create a store with a custom seed set, without loading
    pub fn with_seed(api: Arc<dyn EmployeeApi>, seed: Vec<Employee>) -> Self {
        let (changes, _) = watch::channel(Vec::new());
        Self {
            api,
            seed: Mutex::new(seed),
            changes,
        }
    }

    /// Subscribe to the change stream
    ///
    /// The receiver's current value is the most recently published list;
    /// `changed().await` resolves on each later publication.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Employee>> {
        self.changes.subscribe()
    }

    /// The most recently published list
    pub fn snapshot(&self) -> Vec<Employee> {
        self.changes.borrow().clone()
    }

    /// Fetch all employees, replacing the in-memory list
    ///
    /// On remote failure the seed set becomes the new source of truth and
    /// the error is absorbed.
    pub async fn load(&self) -> Vec<Employee> {
        match self.api.list().await {
            Ok(employees) => {
                tracing::debug!(count = employees.len(), "employee list loaded");
                self.changes.send_replace(employees.clone());
                employees
            }
            Err(err) => {
                tracing::warn!(error = %err, "employee list fetch failed, serving seed data");
                let employees = self.seed.lock().expect("seed mutex poisoned").clone();
                self.changes.send_replace(employees.clone());
                employees
            }
        }
    }

    /// Fetch a single employee by id
    ///
    /// Does not touch the in-memory list. On remote failure the seed set is
    /// consulted before reporting [`StoreError::NotFound`].
    pub async fn get_by_id(&self, id: i64) -> Result<Employee, StoreError> {
        match self.api.get(id).await {
            Ok(employee) => Ok(employee),
            Err(err) => {
                tracing::warn!(error = %err, id, "employee fetch failed, consulting seed data");
                self.seed
                    .lock()
                    .expect("seed mutex poisoned")
                    .iter()
                    .find(|e| e.id == id)
                    .cloned()
                    .ok_or(StoreError::NotFound(id))
            }
        }
    }

    /// Create an employee
    ///
    /// On success the server-assigned record is appended. On remote failure
    /// an id is synthesized (`max(known ids) + 1`, or `1` when none exist)
    /// and the record is appended to both the seed set and the list; the
    /// caller never sees the failure.
    pub async fn create(&self, draft: EmployeeDraft) -> Employee {
        match self.api.create(&draft).await {
            Ok(employee) => {
                tracing::debug!(id = employee.id, "employee created");
                self.changes.send_modify(|list| list.push(employee.clone()));
                employee
            }
            Err(err) => {
                tracing::warn!(error = %err, "employee create failed, appending to seed data");
                let mut seed = self.seed.lock().expect("seed mutex poisoned");
                let employee = draft.into_employee(self.next_id(&seed));
                seed.push(employee.clone());
                drop(seed);
                self.changes.send_modify(|list| list.push(employee.clone()));
                employee
            }
        }
    }

    /// Replace an employee
    ///
    /// The path id wins: the stored and emitted record carries `id`
    /// regardless of the body's id field. On remote failure the seed set is
    /// updated instead; an id absent from the seed set fails with
    /// [`StoreError::NotFound`].
    pub async fn update(&self, id: i64, employee: Employee) -> Result<Employee, StoreError> {
        let mut employee = employee;
        employee.id = id;

        match self.api.update(id, &employee).await {
            Ok(updated) => {
                tracing::debug!(id, "employee updated");
                self.replace_in_current(id, &updated);
                Ok(updated)
            }
            Err(err) => {
                tracing::warn!(error = %err, id, "employee update failed, updating seed data");
                let mut seed = self.seed.lock().expect("seed mutex poisoned");
                let Some(slot) = seed.iter_mut().find(|e| e.id == id) else {
                    return Err(StoreError::NotFound(id));
                };
                *slot = employee.clone();
                drop(seed);
                self.replace_in_current(id, &employee);
                Ok(employee)
            }
        }
    }

    /// Delete an employee
    ///
    /// Always succeeds from the caller's perspective: on remote failure the
    /// record is removed from the seed set (no-op if absent) and from the
    /// list.
    pub async fn delete(&self, id: i64) {
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::debug!(id, "employee deleted");
                self.changes.send_modify(|list| list.retain(|e| e.id != id));
            }
            Err(err) => {
                tracing::warn!(error = %err, id, "employee delete failed, removing from seed data");
                self.seed
                    .lock()
                    .expect("seed mutex poisoned")
                    .retain(|e| e.id != id);
                self.changes.send_modify(|list| list.retain(|e| e.id != id));
            }
        }
    }

    /// Replace the entry with `id` in place, publishing only when present
    fn replace_in_current(&self, id: i64, employee: &Employee) {
        self.changes.send_if_modified(|list| {
            match list.iter_mut().find(|e| e.id == id) {
                Some(slot) => {
                    *slot = employee.clone();
                    true
                }
                None => false,
            }
        });
    }

    /// Next synthesized id: one past the highest id known to the seed set
    /// or the current list, so ids stay unique even after a successful
    /// remote load introduced ids outside the seed range.
    fn next_id(&self, seed: &[Employee]) -> i64 {
        let seed_max = seed.iter().map(|e| e.id).max().unwrap_or(0);
        let current_max = self
            .changes
            .borrow()
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0);
        seed_max.max(current_max) + 1
    }
}
