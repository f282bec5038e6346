// staffdesk-client/examples/dashboard.rs
// Prints the dashboard view against a live API, or against the seed data
// when no server is running.
//
// Usage:
//   cargo run --example dashboard
//   STAFFDESK_API=http://localhost:3000 RUST_LOG=debug cargo run --example dashboard

use staffdesk_client::{ClientConfig, DashboardStats, EmployeeStore, HttpEmployeeApi, Session};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url =
        std::env::var("STAFFDESK_API").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let session = Session::new();
    session.login("demo", "demo")?;

    let http = ClientConfig::new(&base_url)
        .with_timeout(5)
        .build_http_client(session.clone())?;
    let store = EmployeeStore::new(Arc::new(HttpEmployeeApi::new(http))).await;

    let employees = store.snapshot();
    let stats = DashboardStats::from_employees(&employees);

    println!(
        "employees: {} ({} active)",
        stats.total_employees, stats.active_employees
    );
    println!("average salary: {}", stats.average_salary);
    println!("departments ({}):", stats.total_departments);
    for dept in &stats.departments {
        println!("  {:<12} {}", dept.name, dept.count);
    }
    println!("recent hires:");
    for employee in &stats.recent_employees {
        println!(
            "  {} ({}, joined {})",
            employee.name, employee.department, employee.join_date
        );
    }

    session.logout();
    Ok(())
}
