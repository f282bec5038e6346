//! Seed dataset
//!
//! Fixed six-record demo list served when the remote API is unavailable.

use chrono::NaiveDate;
use shared::Employee;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// The seed employees, ids 1 through 6
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            role: "Manager".to_string(),
            department: "IT".to_string(),
            salary: 120000.0,
            join_date: date(2020, 1, 15),
            is_active: true,
        },
        Employee {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane.smith@company.com".to_string(),
            role: "Developer".to_string(),
            department: "IT".to_string(),
            salary: 85000.0,
            join_date: date(2021, 3, 20),
            is_active: true,
        },
        Employee {
            id: 3,
            name: "Mike Johnson".to_string(),
            email: "mike.johnson@company.com".to_string(),
            role: "Designer".to_string(),
            department: "Marketing".to_string(),
            salary: 75000.0,
            join_date: date(2019, 6, 10),
            is_active: true,
        },
        Employee {
            id: 4,
            name: "Sarah Williams".to_string(),
            email: "sarah.williams@company.com".to_string(),
            role: "Analyst".to_string(),
            department: "Finance".to_string(),
            salary: 95000.0,
            join_date: date(2020, 11, 5),
            is_active: true,
        },
        Employee {
            id: 5,
            name: "Robert Brown".to_string(),
            email: "robert.brown@company.com".to_string(),
            role: "Consultant".to_string(),
            department: "HR".to_string(),
            salary: 88000.0,
            join_date: date(2021, 8, 12),
            is_active: false,
        },
        Employee {
            id: 6,
            name: "Emily Davis".to_string(),
            email: "emily.davis@company.com".to_string(),
            role: "Developer".to_string(),
            department: "IT".to_string(),
            salary: 82000.0,
            join_date: date(2022, 1, 8),
            is_active: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let seed = seed_employees();
        assert_eq!(seed.len(), 6);
        assert_eq!(
            seed.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        // Robert Brown is the only inactive record
        assert_eq!(
            seed.iter().filter(|e| !e.is_active).map(|e| e.id).collect::<Vec<_>>(),
            vec![5]
        );
    }
}
