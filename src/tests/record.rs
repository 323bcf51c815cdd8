use std::cmp::Ordering;

use crate::{
    components::registry::{
        kind::EmployeeKind,
        record::{format_amount, Employee, RecordError, Role},
    },
    tests::{create_test_developer, create_test_employee, create_test_manager},
};

#[test]
fn test_details_per_kind() {
    let employee = Employee::new("Alice", 30, "E1", 50000.0);
    assert_eq!(
        employee.details(),
        "Employee Details:\nName: Alice\nAge: 30\nEmployee ID: E1\nSalary: $50000.0"
    );

    let manager = Employee::manager("Bob", 41, "M1", 60000.0, "Eng");
    assert!(manager.details().starts_with("Manager Details:"));
    assert!(manager.details().ends_with("Department: Eng"));

    let developer = Employee::developer("Cara", 27, "D1", 55000.5, "Rust");
    assert!(developer.details().starts_with("Developer Details:"));
    assert!(developer.details().contains("Salary: $55000.5"));
    assert!(developer.details().ends_with("Programming Language: Rust"));
}

#[test]
fn test_summary_per_kind() {
    assert_eq!(
        Employee::new("Alice", 30, "E1", 1.0).to_string(),
        "Employee: Alice (ID: E1)"
    );
    assert_eq!(
        Employee::manager("Bob", 41, "M1", 1.0, "Eng").to_string(),
        "Manager: Bob (Department: Eng)"
    );
    assert_eq!(
        Employee::developer("Cara", 27, "D1", 1.0, "Rust").to_string(),
        "Developer: Cara (Language: Rust)"
    );
}

#[test]
fn test_kind_follows_role() {
    assert_eq!(create_test_employee("E1", 1.0).kind(), EmployeeKind::Employee);
    assert_eq!(create_test_manager("M1", 1.0).kind(), EmployeeKind::Manager);
    assert_eq!(create_test_developer("D1", 1.0).kind(), EmployeeKind::Developer);
    assert_eq!(
        create_test_manager("M1", 1.0).role(),
        &Role::Manager {
            department: "Engineering".to_string()
        }
    );
    assert_eq!(EmployeeKind::Developer.as_str(), "Developer");
}

#[test]
fn test_set_salary_rejects_negative() {
    let mut employee = create_test_employee("E1", 50000.0);

    assert_eq!(employee.set_salary(-1.0), Err(RecordError::NegativeSalary));
    assert_eq!(employee.salary(), 50000.0);

    assert_eq!(employee.set_salary(f64::NAN), Err(RecordError::NegativeSalary));
    assert_eq!(employee.salary(), 50000.0);

    assert!(employee.set_salary(0.0).is_ok());
    assert_eq!(employee.salary(), 0.0);

    assert!(employee.set_salary(72000.5).is_ok());
    assert_eq!(employee.salary(), 72000.5);
}

#[test]
fn test_set_employee_id_rejects_empty() {
    let mut employee = create_test_employee("E1", 1.0);

    let err = employee.set_employee_id("").unwrap_err();
    assert_eq!(err.to_string(), "Employee ID cannot be empty.");
    assert_eq!(employee.employee_id(), "E1");

    assert!(employee.set_employee_id("E2").is_ok());
    assert_eq!(employee.employee_id(), "E2");
}

#[test]
fn test_equality_ignores_everything_but_salary() {
    let employee = Employee::new("Alice", 30, "E1", 50000.0);
    let manager = Employee::manager("Bob", 60, "M1", 50000.0, "Eng");
    let developer = Employee::developer("Alice", 30, "E1", 50001.0, "Rust");

    assert!(employee == manager);
    assert_eq!(employee.compare(&manager), Ordering::Equal);
    assert!(employee != developer);
    assert!(employee < developer);
    assert!(developer > manager);
    assert_eq!(developer.compare(&employee), Ordering::Greater);
}

#[test]
fn test_constructor_keeps_salary_as_given() {
    let employee = Employee::new("Alice", 30, "E1", -10.0);
    assert_eq!(employee.salary(), -10.0);
}

#[test]
fn test_unordered_salaries_compare_equal() {
    let employee = create_test_employee("E1", f64::NAN);
    let other = create_test_employee("E2", 10.0);
    assert_eq!(employee.compare(&other), Ordering::Equal);
    assert_eq!(other.compare(&employee), Ordering::Equal);
}

#[test]
fn test_format_amount() {
    assert_eq!(format_amount(50000.0), "50000.0");
    assert_eq!(format_amount(1234.5), "1234.5");
    assert_eq!(format_amount(0.0), "0.0");
}
