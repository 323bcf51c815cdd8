use crate::{
    components::registry::{kind::EmployeeKind, store::EmployeeStore},
    tests::{create_test_developer, create_test_employee, create_test_manager},
};

#[test]
fn test_put_and_get() {
    let mut store = EmployeeStore::new();
    assert!(store.is_empty());

    assert!(store.put("E1", create_test_employee("E1", 50000.0)).is_none());
    assert!(store.exists("E1"));
    assert!(!store.exists("E2"));
    assert_eq!(store.get("E1").map(|e| e.salary()), Some(50000.0));
    assert!(store.get("E2").is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_put_overwrites_silently() {
    let mut store = EmployeeStore::new();
    store.put("E1", create_test_employee("E1", 50000.0));

    let replaced = store.put("E1", create_test_manager("E1", 90000.0));
    assert_eq!(replaced.map(|e| e.kind()), Some(EmployeeKind::Employee));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("E1").map(|e| e.kind()), Some(EmployeeKind::Manager));
}

#[test]
fn test_get_kind_filters_exactly() {
    let mut store = EmployeeStore::new();
    store.put("E1", create_test_employee("E1", 1.0));
    store.put("M1", create_test_manager("M1", 2.0));
    store.put("D1", create_test_developer("D1", 3.0));

    assert!(store.get_kind("E1", EmployeeKind::Employee).is_some());
    assert!(store.get_kind("M1", EmployeeKind::Employee).is_none());
    assert!(store.get_kind("D1", EmployeeKind::Employee).is_none());

    assert!(store.get_kind("M1", EmployeeKind::Manager).is_some());
    assert!(store.get_kind("E1", EmployeeKind::Manager).is_none());

    assert!(store.get_kind("D1", EmployeeKind::Developer).is_some());
    assert!(store.get_kind("missing", EmployeeKind::Developer).is_none());
}

#[test]
fn test_remove() {
    let mut store = EmployeeStore::new();
    store.put("E1", create_test_employee("E1", 1.0));

    assert!(store.remove("E1").is_some());
    assert!(store.remove("E1").is_none());
    assert!(!store.exists("E1"));
}

#[test]
fn test_iter_is_ordered_by_key() {
    let mut store = EmployeeStore::new();
    store.put("M1", create_test_manager("M1", 2.0));
    store.put("D1", create_test_developer("D1", 3.0));
    store.put("E1", create_test_employee("E1", 1.0));

    let keys: Vec<&str> = store.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["D1", "E1", "M1"]);
}

#[test]
fn test_changed_id_keeps_store_key() {
    let mut store = EmployeeStore::new();
    store.put("E1", create_test_employee("E1", 1.0));

    store.get_mut("E1").unwrap().set_employee_id("E9").unwrap();

    assert!(store.exists("E1"));
    assert!(!store.exists("E9"));
    assert_eq!(store.get("E1").map(|e| e.employee_id()), Some("E9"));
}
