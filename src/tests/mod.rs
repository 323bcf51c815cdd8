#![allow(dead_code)]

use crate::components::{
    config::{OutputFormat, ReplConfig},
    error::RegistryError,
    registry::{record::Employee, store::EmployeeStore},
    repl::REPL,
};

mod record;
mod store;

// Runs a scripted session against `store` and returns the result with the transcript
pub fn run_session_with_format(
    store: &mut EmployeeStore,
    script: &str,
    format: OutputFormat,
) -> (Result<(), RegistryError>, String) {
    let mut output = Vec::new();
    let result = {
        let mut repl = REPL::new(store, script.as_bytes(), &mut output, ReplConfig { format });
        repl.run()
    };
    (result, String::from_utf8(output).unwrap())
}

pub fn run_session(store: &mut EmployeeStore, script: &str) -> (Result<(), RegistryError>, String) {
    run_session_with_format(store, script, OutputFormat::Standard)
}

pub fn create_test_employee(id: &str, salary: f64) -> Employee {
    Employee::new("Test Employee", 30, id, salary)
}

pub fn create_test_manager(id: &str, salary: f64) -> Employee {
    Employee::manager("Test Manager", 45, id, salary, "Engineering")
}

pub fn create_test_developer(id: &str, salary: f64) -> Employee {
    Employee::developer("Test Developer", 28, id, salary, "Rust")
}
