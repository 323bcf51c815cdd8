use super::kind::EmployeeKind;
use super::record::Employee;
use std::collections::HashMap;

/// In-memory mapping from employee ID to record, owned for the whole session.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    employees: HashMap<String, Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        EmployeeStore {
            employees: HashMap::new(),
        }
    }

    /// Inserts a record under `id`, returning whatever was stored there before.
    pub fn put(&mut self, id: &str, employee: Employee) -> Option<Employee> {
        let previous = self.employees.insert(id.to_string(), employee);
        match &previous {
            Some(old) => tracing::debug!(id, replaced = %old, "overwrote stored record"),
            None => tracing::debug!(id, "stored record"),
        }
        previous
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Employee> {
        self.employees.get_mut(id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.employees.contains_key(id)
    }

    /// Lookup that only succeeds when the stored record is exactly `kind`.
    pub fn get_kind(&self, id: &str, kind: EmployeeKind) -> Option<&Employee> {
        if !self.exists(id) {
            return None;
        }
        self.get(id).filter(|employee| employee.kind() == kind)
    }

    pub fn remove(&mut self, id: &str) -> Option<Employee> {
        let removed = self.employees.remove(id);
        if removed.is_some() {
            tracing::debug!(id, "removed record");
        }
        removed
    }

    /// All records ordered by store key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Employee)> {
        let mut entries: Vec<(&str, &Employee)> = self
            .employees
            .iter()
            .map(|(id, employee)| (id.as_str(), employee))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
