use super::kind::EmployeeKind;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Rejected record mutations. The record keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Salary cannot be negative.")]
    NegativeSalary,
    #[error("Employee ID cannot be empty.")]
    EmptyEmployeeId,
}

/// Role-specific data carried by a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum Role {
    Employee,
    Manager { department: String },
    Developer { language: String },
}

impl Role {
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Role::Employee => EmployeeKind::Employee,
            Role::Manager { .. } => EmployeeKind::Manager,
            Role::Developer { .. } => EmployeeKind::Developer,
        }
    }
}

/// An employee record.
///
/// Equality and ordering look at the salary only: two different people with
/// the same pay compare equal, whatever their kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    age: i64,
    employee_id: String,
    salary: f64,
    role: Role,
}

impl Employee {
    pub fn new(name: &str, age: i64, employee_id: &str, salary: f64) -> Self {
        Employee::with_role(name, age, employee_id, salary, Role::Employee)
    }

    pub fn manager(name: &str, age: i64, employee_id: &str, salary: f64, department: &str) -> Self {
        let role = Role::Manager {
            department: department.to_string(),
        };
        Employee::with_role(name, age, employee_id, salary, role)
    }

    pub fn developer(name: &str, age: i64, employee_id: &str, salary: f64, language: &str) -> Self {
        let role = Role::Developer {
            language: language.to_string(),
        };
        Employee::with_role(name, age, employee_id, salary, role)
    }

    // Salary is stored as given; only `set_salary` enforces the lower bound.
    fn with_role(name: &str, age: i64, employee_id: &str, salary: f64, role: Role) -> Self {
        Employee {
            name: name.to_string(),
            age,
            employee_id: employee_id.to_string(),
            salary,
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(dead_code)]
    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn kind(&self) -> EmployeeKind {
        self.role.kind()
    }

    pub fn set_salary(&mut self, salary: f64) -> Result<(), RecordError> {
        // NaN fails this test too
        if salary >= 0.0 {
            self.salary = salary;
            Ok(())
        } else {
            Err(RecordError::NegativeSalary)
        }
    }

    /// Replaces the record's own identifier. A store holding this record keeps
    /// its existing key.
    pub fn set_employee_id(&mut self, employee_id: &str) -> Result<(), RecordError> {
        if employee_id.is_empty() {
            return Err(RecordError::EmptyEmployeeId);
        }
        self.employee_id = employee_id.to_string();
        Ok(())
    }

    /// Field/value pairs in display order, role fields last.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.name.clone()),
            ("Age", self.age.to_string()),
            ("Employee ID", self.employee_id.clone()),
            ("Salary", format!("${}", format_amount(self.salary))),
        ];
        match &self.role {
            Role::Employee => {}
            Role::Manager { department } => fields.push(("Department", department.clone())),
            Role::Developer { language } => {
                fields.push(("Programming Language", language.clone()))
            }
        }
        fields
    }

    /// Multi-line rendering of every field, headed by the record kind.
    pub fn details(&self) -> String {
        let mut lines = vec![format!("{} Details:", self.kind())];
        lines.extend(
            self.fields()
                .into_iter()
                .map(|(field, value)| format!("{}: {}", field, value)),
        );
        lines.join("\n")
    }

    /// Total comparison by salary. An unordered pair (NaN) counts as equal.
    pub fn compare(&self, other: &Employee) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.salary == other.salary
    }
}

impl PartialOrd for Employee {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.salary.partial_cmp(&other.salary)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.role {
            Role::Employee => write!(f, "Employee: {} (ID: {})", self.name, self.employee_id),
            Role::Manager { department } => {
                write!(f, "Manager: {} (Department: {})", self.name, department)
            }
            Role::Developer { language } => {
                write!(f, "Developer: {} (Language: {})", self.name, language)
            }
        }
    }
}

/// Formats an amount keeping the trailing `.0` on whole values (`50000.0`).
pub fn format_amount(amount: f64) -> String {
    format!("{:?}", amount)
}
