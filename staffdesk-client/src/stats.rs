//! Dashboard statistics
//!
//! Aggregates computed from an employee list. UI consumers subscribe to
//! the store and recompute on every publication.

use serde::{Deserialize, Serialize};
use shared::Employee;

/// How many employees a department has
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub name: String,
    pub count: usize,
}

/// Aggregate view for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub total_departments: usize,
    /// Mean salary rounded to the nearest integer, 0 for an empty list
    pub average_salary: f64,
    /// Department counts in first-seen order
    pub departments: Vec<DepartmentCount>,
    /// The five most recent hires, newest first
    pub recent_employees: Vec<Employee>,
}

impl DashboardStats {
    pub fn from_employees(employees: &[Employee]) -> Self {
        let total_employees = employees.len();
        let active_employees = employees.iter().filter(|e| e.is_active).count();
        let average_salary = if employees.is_empty() {
            0.0
        } else {
            (employees.iter().map(|e| e.salary).sum::<f64>() / employees.len() as f64).round()
        };

        let mut departments: Vec<DepartmentCount> = Vec::new();
        for employee in employees {
            match departments.iter_mut().find(|d| d.name == employee.department) {
                Some(dept) => dept.count += 1,
                None => departments.push(DepartmentCount {
                    name: employee.department.clone(),
                    count: 1,
                }),
            }
        }
        let total_departments = departments.len();

        let mut recent_employees = employees.to_vec();
        recent_employees.sort_by(|a, b| b.join_date.cmp(&a.join_date));
        recent_employees.truncate(5);

        Self {
            total_employees,
            active_employees,
            total_departments,
            average_salary,
            departments,
            recent_employees,
        }
    }
}

/// Case-insensitive department filter; an empty filter keeps everything
pub fn filter_by_department(employees: &[Employee], department: &str) -> Vec<Employee> {
    if department.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|e| e.department.eq_ignore_ascii_case(department))
        .cloned()
        .collect()
}

/// Salary classification used to accent list rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryBand {
    /// Above 100 000
    High,
    /// Above 50 000
    Elevated,
    Standard,
}

impl SalaryBand {
    pub fn for_salary(salary: f64) -> Self {
        if salary > 100_000.0 {
            SalaryBand::High
        } else if salary > 50_000.0 {
            SalaryBand::Elevated
        } else {
            SalaryBand::Standard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_employees;
    use chrono::NaiveDate;

    #[test]
    fn test_dashboard_stats_over_seed() {
        let stats = DashboardStats::from_employees(&seed_employees());

        assert_eq!(stats.total_employees, 6);
        assert_eq!(stats.active_employees, 5);
        assert_eq!(stats.total_departments, 4);
        // (120000 + 85000 + 75000 + 95000 + 88000 + 82000) / 6
        assert_eq!(stats.average_salary, 90833.0);

        // First-seen order: IT, Marketing, Finance, HR
        assert_eq!(
            stats
                .departments
                .iter()
                .map(|d| (d.name.as_str(), d.count))
                .collect::<Vec<_>>(),
            vec![("IT", 3), ("Marketing", 1), ("Finance", 1), ("HR", 1)]
        );

        // Newest first: Emily (2022), Robert (2021-08), Jane (2021-03),
        // Sarah (2020-11), John (2020-01)
        assert_eq!(
            stats.recent_employees.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![6, 5, 2, 4, 1]
        );
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let stats = DashboardStats::from_employees(&[]);
        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.average_salary, 0.0);
        assert!(stats.departments.is_empty());
        assert!(stats.recent_employees.is_empty());
    }

    #[test]
    fn test_recent_employees_caps_at_five() {
        let mut employees = seed_employees();
        let mut extra = employees[0].clone();
        extra.id = 7;
        extra.join_date = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
        employees.push(extra);

        let stats = DashboardStats::from_employees(&employees);
        assert_eq!(stats.recent_employees.len(), 5);
        assert_eq!(stats.recent_employees[0].id, 7);
    }

    #[test]
    fn test_filter_by_department() {
        let employees = seed_employees();

        let it = filter_by_department(&employees, "it");
        assert_eq!(it.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2, 6]);

        let all = filter_by_department(&employees, "");
        assert_eq!(all.len(), 6);

        let none = filter_by_department(&employees, "Legal");
        assert!(none.is_empty());
    }

    #[test]
    fn test_salary_bands() {
        assert_eq!(SalaryBand::for_salary(120000.0), SalaryBand::High);
        assert_eq!(SalaryBand::for_salary(100000.0), SalaryBand::Elevated);
        assert_eq!(SalaryBand::for_salary(88000.0), SalaryBand::Elevated);
        assert_eq!(SalaryBand::for_salary(50000.0), SalaryBand::Standard);
        assert_eq!(SalaryBand::for_salary(0.0), SalaryBand::Standard);
    }
}
