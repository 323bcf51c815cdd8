use serde::{Deserialize, Serialize};
use std::fmt;

/// The runtime kind of a stored record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EmployeeKind {
    Employee,  // Plain employee with no role-specific data
    Manager,   // Employee heading a department
    Developer, // Employee working in a programming language
}

impl EmployeeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeKind::Employee => "Employee",
            EmployeeKind::Manager => "Manager",
            EmployeeKind::Developer => "Developer",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
