use serde_json::json;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

use super::help::{get_general_help, OPERATION_HELP};
use super::MenuChoice;
use crate::components::{
    config::OutputFormat,
    error::RegistryError,
    registry::{
        record::{format_amount, Employee},
        store::EmployeeStore,
    },
};

/// Row of the employee listing in table format
#[derive(Tabled)]
struct EmployeeRow {
    key: String,     // Store key the record is filed under
    kind: String,    // Employee, Manager or Developer
    name: String,    // Employee name
    salary: String,  // Salary with currency sign
    summary: String, // Kind-specific one-line summary
}

/// Renders every field of one record.
pub fn format_employee(employee: &Employee, format: OutputFormat) -> Result<String, RegistryError> {
    match format {
        OutputFormat::Standard => Ok(employee.details()),
        OutputFormat::Table => {
            let mut builder = Builder::new();
            builder.push_record(["Field", "Value"]);
            builder.push_record(["Kind", employee.kind().as_str()]);
            for (field, value) in employee.fields() {
                builder.push_record([field.to_string(), value]);
            }
            Ok(builder.build().with(Style::ascii()).to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "kind": employee.kind(),
            "data": employee,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))?),
    }
}

/// Renders the summary of every stored record, ordered by key.
pub fn format_listing(store: &EmployeeStore, format: OutputFormat) -> Result<String, RegistryError> {
    match format {
        OutputFormat::Standard => Ok(store
            .iter()
            .map(|(key, employee)| format!("{}: {}", key, employee))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            let rows = store.iter().map(|(key, employee)| EmployeeRow {
                key: key.to_string(),
                kind: employee.kind().to_string(),
                name: employee.name().to_string(),
                salary: format!("${}", format_amount(employee.salary())),
                summary: employee.to_string(),
            });
            Ok(Table::new(rows).with(Style::ascii()).to_string())
        }
        OutputFormat::Json => {
            let entries = store
                .iter()
                .map(|(key, employee)| {
                    json!({
                        "key": key,
                        "summary": employee.to_string(),
                        "data": employee,
                    })
                })
                .collect::<Vec<_>>();
            Ok(serde_json::to_string_pretty(&json!({
                "count": store.len(),
                "data": entries,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))?)
        }
    }
}

/// Describes every menu operation.
pub fn format_general_help(format: OutputFormat) -> Result<String, RegistryError> {
    match format {
        OutputFormat::Standard => Ok(get_general_help()),
        OutputFormat::Json => {
            let operations = MenuChoice::ALL
                .iter()
                .map(|choice| {
                    json!({
                        "choice": choice.key(),
                        "label": choice.label(),
                        "help": OPERATION_HELP.get(choice.key()),
                    })
                })
                .collect::<Vec<_>>();
            Ok(serde_json::to_string_pretty(&operations)?)
        }
        OutputFormat::Table => {
            let mut builder = Builder::new();
            builder.push_record(["Choice", "Operation", "Description", "Prompts"]);
            for choice in MenuChoice::ALL {
                let (description, prompts) = OPERATION_HELP
                    .get(choice.key())
                    .map(|help| (help.description.clone(), help.prompts.join(", ")))
                    .unwrap_or_default();
                builder.push_record([
                    choice.key().to_string(),
                    choice.label().to_string(),
                    description,
                    prompts,
                ]);
            }
            Ok(builder.build().with(Style::ascii()).to_string())
        }
    }
}
