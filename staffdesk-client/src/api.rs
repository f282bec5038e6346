//! Typed access to the `/employees` resource

use crate::error::ClientResult;
use crate::http::HttpClient;
use async_trait::async_trait;
use shared::{Employee, EmployeeDraft};

/// Remote employee API seam
///
/// [`HttpEmployeeApi`] is the real implementation; the store only depends
/// on this trait, so tests can substitute scripted remotes.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// `GET /employees`
    async fn list(&self) -> ClientResult<Vec<Employee>>;

    /// `GET /employees/{id}`
    async fn get(&self, id: i64) -> ClientResult<Employee>;

    /// `POST /employees`
    async fn create(&self, draft: &EmployeeDraft) -> ClientResult<Employee>;

    /// `PUT /employees/{id}`
    async fn update(&self, id: i64, employee: &Employee) -> ClientResult<Employee>;

    /// `DELETE /employees/{id}`
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// [`EmployeeApi`] over the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    http: HttpClient,
}

impl HttpEmployeeApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.http.get("/employees").await
    }

    async fn get(&self, id: i64) -> ClientResult<Employee> {
        self.http.get(&format!("/employees/{id}")).await
    }

    async fn create(&self, draft: &EmployeeDraft) -> ClientResult<Employee> {
        self.http.post("/employees", draft).await
    }

    async fn update(&self, id: i64, employee: &Employee) -> ClientResult<Employee> {
        self.http.put(&format!("/employees/{id}"), employee).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/employees/{id}")).await
    }
}
