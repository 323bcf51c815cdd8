use std::cmp::Ordering;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::components::{
    config::ReplConfig,
    error::RegistryError,
    registry::{
        kind::EmployeeKind,
        record::{format_amount, Employee},
        store::EmployeeStore,
    },
};

mod format;
mod help;
use format::{format_employee, format_general_help, format_listing};

/// Entries of the main menu, in display order. `Help` is not listed and is
/// reached by typing `help` or `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreatePerson,
    CreateEmployee,
    CreateManager,
    ShowDetails,
    CompareSalaries,
    Exit,
    CreateDeveloper,
    UpdateEmployee,
    RemoveEmployee,
    ListEmployees,
    Help,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::CreatePerson,
        MenuChoice::CreateEmployee,
        MenuChoice::CreateManager,
        MenuChoice::ShowDetails,
        MenuChoice::CompareSalaries,
        MenuChoice::Exit,
        MenuChoice::CreateDeveloper,
        MenuChoice::UpdateEmployee,
        MenuChoice::RemoveEmployee,
        MenuChoice::ListEmployees,
        MenuChoice::Help,
    ];

    /// What the user types to pick this entry
    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::CreatePerson => "1",
            MenuChoice::CreateEmployee => "2",
            MenuChoice::CreateManager => "3",
            MenuChoice::ShowDetails => "4",
            MenuChoice::CompareSalaries => "5",
            MenuChoice::Exit => "6",
            MenuChoice::CreateDeveloper => "7",
            MenuChoice::UpdateEmployee => "8",
            MenuChoice::RemoveEmployee => "9",
            MenuChoice::ListEmployees => "10",
            MenuChoice::Help => "help",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreatePerson => "Create a Person",
            MenuChoice::CreateEmployee => "Create an Employee",
            MenuChoice::CreateManager => "Create a Manager",
            MenuChoice::ShowDetails => "Show Details",
            MenuChoice::CompareSalaries => "Compare Salaries",
            MenuChoice::Exit => "Exit",
            MenuChoice::CreateDeveloper => "Create a Developer",
            MenuChoice::UpdateEmployee => "Update an Employee",
            MenuChoice::RemoveEmployee => "Remove an Employee",
            MenuChoice::ListEmployees => "List Employees",
            MenuChoice::Help => "Help",
        }
    }

    pub fn parse(input: &str) -> Option<MenuChoice> {
        let input = input.trim();
        if input == "?" {
            return Some(MenuChoice::Help);
        }
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key().eq_ignore_ascii_case(input))
    }
}

/// Where the controller is in its menu cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    MenuDisplayed,
    AwaitingChoice,
    ExecutingOperation(MenuChoice),
    Exited,
}

/// Fields shared by every stored record kind, in prompt order.
struct EmployeeFields {
    name: String,
    age: i64,
    employee_id: String,
    salary: f64,
}

/// Menu-driven controller over an employee store.
/// Reads choices and field values from `input` and writes the transcript to `output`.
pub struct REPL<'a, R, W> {
    store: &'a mut EmployeeStore, // Records created during the session
    input: R,
    output: W,
    config: ReplConfig,
    state: ReplState,
}

impl<'a, R: BufRead, W: Write> REPL<'a, R, W> {
    pub fn new(store: &'a mut EmployeeStore, input: R, output: W, config: ReplConfig) -> Self {
        REPL {
            store,
            input,
            output,
            config,
            state: ReplState::MenuDisplayed,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> ReplState {
        self.state
    }

    /// Runs the menu loop until the user exits or input ends at the menu prompt.
    /// Unparseable numbers and input ending mid-operation abort the session.
    pub fn run(&mut self) -> Result<(), RegistryError> {
        loop {
            self.state = match self.state {
                ReplState::MenuDisplayed => {
                    self.print_menu()?;
                    ReplState::AwaitingChoice
                }
                ReplState::AwaitingChoice => match self.prompt("\nEnter your choice: ")? {
                    None => {
                        tracing::info!("input closed at the main menu");
                        ReplState::Exited
                    }
                    Some(text) => match MenuChoice::parse(&text) {
                        Some(choice) => ReplState::ExecutingOperation(choice),
                        None => {
                            tracing::debug!(input = %text, "invalid menu choice");
                            writeln!(self.output, "\nInvalid choice. Please try again.\n")?;
                            ReplState::MenuDisplayed
                        }
                    },
                },
                ReplState::ExecutingOperation(choice) => self.execute(choice)?,
                ReplState::Exited => return Ok(()),
            };
        }
    }

    /// Performs one menu operation and returns the state to move to.
    pub fn execute(&mut self, choice: MenuChoice) -> Result<ReplState, RegistryError> {
        tracing::debug!(operation = choice.label(), "executing operation");
        match choice {
            MenuChoice::CreatePerson => self.create_person()?,
            MenuChoice::CreateEmployee => self.create_employee()?,
            MenuChoice::CreateManager => self.create_manager()?,
            MenuChoice::CreateDeveloper => self.create_developer()?,
            MenuChoice::ShowDetails => self.show_details()?,
            MenuChoice::CompareSalaries => self.compare_salaries()?,
            MenuChoice::UpdateEmployee => self.update_employee()?,
            MenuChoice::RemoveEmployee => self.remove_employee()?,
            MenuChoice::ListEmployees => self.list_employees()?,
            MenuChoice::Help => {
                let help = format_general_help(self.config.format)?;
                writeln!(self.output, "\n{}\n", help)?;
            }
            MenuChoice::Exit => {
                writeln!(
                    self.output,
                    "\nExiting the system. All resources have been freed."
                )?;
                writeln!(self.output, "\nGoodbye!\n")?;
                return Ok(ReplState::Exited);
            }
        }
        Ok(ReplState::MenuDisplayed)
    }

    fn print_menu(&mut self) -> Result<(), RegistryError> {
        writeln!(self.output, "\n--- Employee Management System ---")?;
        writeln!(self.output, "\nChoose an operation:")?;
        for choice in MenuChoice::ALL {
            if choice != MenuChoice::Help {
                writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
            }
        }
        writeln!(self.output, "Type 'help' for a description of each operation.")?;
        Ok(())
    }

    fn create_person(&mut self) -> Result<(), RegistryError> {
        let name = self.read_text("Enter Name: ", "name")?;
        let age: i64 = self.read_number("Enter Age: ", "age")?;
        writeln!(
            self.output,
            "\nPerson created with name: {} and age: {}.\n",
            name, age
        )?;
        Ok(())
    }

    fn create_employee(&mut self) -> Result<(), RegistryError> {
        let fields = self.read_employee_fields()?;
        let employee = Employee::new(&fields.name, fields.age, &fields.employee_id, fields.salary);
        self.store_employee(&fields.employee_id, employee);
        writeln!(
            self.output,
            "\nEmployee created with name: {}, age: {}, ID: {}, and salary: ${}.\n",
            fields.name,
            fields.age,
            fields.employee_id,
            format_amount(fields.salary)
        )?;
        Ok(())
    }

    fn create_manager(&mut self) -> Result<(), RegistryError> {
        let fields = self.read_employee_fields()?;
        let department = self.read_text("Enter Department: ", "department")?;
        let manager = Employee::manager(
            &fields.name,
            fields.age,
            &fields.employee_id,
            fields.salary,
            &department,
        );
        self.store_employee(&fields.employee_id, manager);
        writeln!(
            self.output,
            "\nManager created with name: {}, age: {}, ID: {}, salary: ${}, and department: {}.\n",
            fields.name,
            fields.age,
            fields.employee_id,
            format_amount(fields.salary),
            department
        )?;
        Ok(())
    }

    fn create_developer(&mut self) -> Result<(), RegistryError> {
        let fields = self.read_employee_fields()?;
        let language = self.read_text("Enter Programming Language: ", "programming language")?;
        let developer = Employee::developer(
            &fields.name,
            fields.age,
            &fields.employee_id,
            fields.salary,
            &language,
        );
        self.store_employee(&fields.employee_id, developer);
        writeln!(
            self.output,
            "\nDeveloper created with name: {}, age: {}, ID: {}, salary: ${}, and programming language: {}.\n",
            fields.name,
            fields.age,
            fields.employee_id,
            format_amount(fields.salary),
            language
        )?;
        Ok(())
    }

    fn show_details(&mut self) -> Result<(), RegistryError> {
        writeln!(self.output, "\nChoose details to show:")?;
        writeln!(self.output, "1. Person (Not available - persons are not stored)")?;
        writeln!(self.output, "2. Employee")?;
        writeln!(self.output, "3. Manager")?;
        writeln!(self.output, "4. Developer")?;

        let choice = self.read_text("Enter your choice: ", "details choice")?;
        let kind = match choice.trim() {
            "1" => {
                writeln!(self.output, "\nPerson details not stored in this system.\n")?;
                return Ok(());
            }
            "2" => EmployeeKind::Employee,
            "3" => EmployeeKind::Manager,
            "4" => EmployeeKind::Developer,
            _ => {
                writeln!(self.output, "\nInvalid choice.\n")?;
                return Ok(());
            }
        };

        let employee_id = self.read_text("Enter Employee ID: ", "employee ID")?;
        let rendered = match self.store.get_kind(&employee_id, kind) {
            Some(employee) => Some(format_employee(employee, self.config.format)?),
            None => None,
        };

        match rendered {
            Some(text) => writeln!(self.output, "{}", text)?,
            None => {
                tracing::debug!(id = %employee_id, kind = %kind, "details lookup missed");
                match kind {
                    EmployeeKind::Employee => writeln!(
                        self.output,
                        "\nEmployee not found or not a basic Employee.\n"
                    )?,
                    other => writeln!(
                        self.output,
                        "\n{kind} not found or ID does not belong to a {kind}.\n",
                        kind = other
                    )?,
                }
            }
        }
        Ok(())
    }

    fn compare_salaries(&mut self) -> Result<(), RegistryError> {
        writeln!(self.output, "\nChoose two employees to compare salaries.")?;
        let first_id =
            self.read_text("Enter the first employee's ID (e.g., E123): ", "first employee ID")?;
        let second_id = self.read_text(
            "Enter the second employee's ID (e.g., M456): ",
            "second employee ID",
        )?;

        let (first, second) = match (self.store.get(&first_id), self.store.get(&second_id)) {
            (Some(first), Some(second)) => (first, second),
            _ => {
                writeln!(self.output, "\nOne or both employee IDs not found.\n")?;
                return Ok(());
            }
        };

        let relation = match first.compare(second) {
            Ordering::Greater => "has a higher salary than",
            Ordering::Less => "has a lower salary than",
            Ordering::Equal => "has the same salary as",
        };
        writeln!(self.output, "\nComparing salaries:")?;
        writeln!(
            self.output,
            "Employee {} ({}) {} {} {} ({}).",
            first.name(),
            first_id,
            relation,
            second.kind(),
            second.name(),
            second_id
        )?;
        Ok(())
    }

    fn update_employee(&mut self) -> Result<(), RegistryError> {
        let key = self.read_text("Enter Employee ID: ", "employee ID")?;
        if !self.store.exists(&key) {
            writeln!(self.output, "\nEmployee not found.\n")?;
            return Ok(());
        }

        writeln!(self.output, "\nChoose what to update:")?;
        writeln!(self.output, "1. Salary")?;
        writeln!(self.output, "2. Employee ID")?;
        let choice = self.read_text("Enter your choice: ", "update choice")?;

        match choice.trim() {
            "1" => {
                let salary: f64 = self.read_number("Enter New Salary: ", "salary")?;
                let Some(employee) = self.store.get_mut(&key) else {
                    return Ok(());
                };
                match employee.set_salary(salary) {
                    Ok(()) => writeln!(
                        self.output,
                        "\nSalary updated for {} ({}): ${}.\n",
                        employee.name(),
                        key,
                        format_amount(employee.salary())
                    )?,
                    Err(e) => {
                        tracing::warn!(id = %key, salary, "rejected salary update");
                        writeln!(self.output, "{}", e)?;
                    }
                }
            }
            "2" => {
                let new_id = self.read_text("Enter New Employee ID: ", "new employee ID")?;
                let Some(employee) = self.store.get_mut(&key) else {
                    return Ok(());
                };
                match employee.set_employee_id(&new_id) {
                    Ok(()) => {
                        tracing::info!(key = %key, new_id = %new_id, "employee ID changed without rekeying");
                        writeln!(
                            self.output,
                            "\nEmployee ID changed to {}. The record is still stored under {}.\n",
                            new_id, key
                        )?;
                    }
                    Err(e) => {
                        tracing::warn!(id = %key, "rejected empty employee ID");
                        writeln!(self.output, "{}", e)?;
                    }
                }
            }
            _ => writeln!(self.output, "\nInvalid choice.\n")?,
        }
        Ok(())
    }

    fn remove_employee(&mut self) -> Result<(), RegistryError> {
        let key = self.read_text("Enter Employee ID: ", "employee ID")?;
        match self.store.remove(&key) {
            Some(employee) => writeln!(self.output, "Employee {} record deleted.", employee.name())?,
            None => writeln!(self.output, "\nEmployee not found.\n")?,
        }
        Ok(())
    }

    fn list_employees(&mut self) -> Result<(), RegistryError> {
        if self.store.is_empty() {
            writeln!(self.output, "\nNo employees stored.\n")?;
            return Ok(());
        }
        let listing = format_listing(self.store, self.config.format)?;
        writeln!(self.output, "\n{}\n", listing)?;
        Ok(())
    }

    fn store_employee(&mut self, key: &str, employee: Employee) {
        tracing::info!(id = key, kind = %employee.kind(), "created record");
        self.store.put(key, employee);
    }

    fn read_employee_fields(&mut self) -> Result<EmployeeFields, RegistryError> {
        let name = self.read_text("Enter Name: ", "name")?;
        let age = self.read_number("Enter Age: ", "age")?;
        let employee_id = self.read_text("Enter Employee ID: ", "employee ID")?;
        let salary = self.read_number("Enter Salary: ", "salary")?;
        Ok(EmployeeFields {
            name,
            age,
            employee_id,
            salary,
        })
    }

    /// Writes `prompt` and reads one line without its terminator.
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, RegistryError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn read_text(&mut self, prompt: &str, field: &'static str) -> Result<String, RegistryError> {
        self.prompt(prompt)?
            .ok_or(RegistryError::UnexpectedEof { field })
    }

    fn read_number<T: FromStr>(
        &mut self,
        prompt: &str,
        field: &'static str,
    ) -> Result<T, RegistryError> {
        let text = self.read_text(prompt, field)?;
        match text.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => Err(RegistryError::InvalidNumber { field, input: text }),
        }
    }
}
