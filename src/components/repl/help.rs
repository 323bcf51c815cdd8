use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

use super::MenuChoice;

#[derive(Debug, Clone, Serialize)]
pub struct OperationHelp {
    pub description: String,
    pub prompts: Vec<String>,
}

lazy_static! {
    pub static ref OPERATION_HELP: HashMap<&'static str, OperationHelp> = {
        let mut m = HashMap::new();

        m.insert(
            "1",
            OperationHelp {
                description: "Reads a name and age and confirms them. Persons are not stored"
                    .to_string(),
                prompts: vec!["Name".to_string(), "Age".to_string()],
            },
        );

        m.insert(
            "2",
            OperationHelp {
                description: "Creates a plain employee and stores it under its ID, replacing any record with that ID"
                    .to_string(),
                prompts: vec![
                    "Name".to_string(),
                    "Age".to_string(),
                    "Employee ID".to_string(),
                    "Salary".to_string(),
                ],
            },
        );

        m.insert(
            "3",
            OperationHelp {
                description: "Creates a manager heading a department and stores it under its ID"
                    .to_string(),
                prompts: vec![
                    "Name".to_string(),
                    "Age".to_string(),
                    "Employee ID".to_string(),
                    "Salary".to_string(),
                    "Department".to_string(),
                ],
            },
        );

        m.insert(
            "4",
            OperationHelp {
                description: "Shows every field of a stored record. Each kind is looked up separately: a manager ID does not show under Employee"
                    .to_string(),
                prompts: vec!["Record kind".to_string(), "Employee ID".to_string()],
            },
        );

        m.insert(
            "5",
            OperationHelp {
                description: "Reports whether the first employee earns more, less or the same as the second"
                    .to_string(),
                prompts: vec!["First employee ID".to_string(), "Second employee ID".to_string()],
            },
        );

        m.insert(
            "6",
            OperationHelp {
                description: "Leaves the registry. Stored records are discarded".to_string(),
                prompts: vec![],
            },
        );

        m.insert(
            "7",
            OperationHelp {
                description: "Creates a developer working in a programming language and stores it under its ID"
                    .to_string(),
                prompts: vec![
                    "Name".to_string(),
                    "Age".to_string(),
                    "Employee ID".to_string(),
                    "Salary".to_string(),
                    "Programming Language".to_string(),
                ],
            },
        );

        m.insert(
            "8",
            OperationHelp {
                description: "Changes the salary or the ID of a stored record. Negative salaries and empty IDs are rejected; a changed ID does not move the record to a new key"
                    .to_string(),
                prompts: vec![
                    "Employee ID".to_string(),
                    "Field".to_string(),
                    "New value".to_string(),
                ],
            },
        );

        m.insert(
            "9",
            OperationHelp {
                description: "Deletes a stored record of any kind".to_string(),
                prompts: vec!["Employee ID".to_string()],
            },
        );

        m.insert(
            "10",
            OperationHelp {
                description: "Lists every stored record ordered by ID".to_string(),
                prompts: vec![],
            },
        );

        m.insert(
            "help",
            OperationHelp {
                description: "Shows this help".to_string(),
                prompts: vec![],
            },
        );

        m
    };
}

pub fn get_general_help() -> String {
    let mut lines = vec!["Available operations:".to_string()];
    for choice in MenuChoice::ALL {
        let description = OPERATION_HELP
            .get(choice.key())
            .map(|help| help.description.as_str())
            .unwrap_or_default();
        lines.push(format!("  {:<5} {} - {}", choice.key(), choice.label(), description));
    }
    lines.join("\n")
}
