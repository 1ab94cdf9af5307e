use hotel_core::{Customer, CustomerPatch, CustomerStore, StoreError};
use tempfile::TempDir;

fn store(dir: &TempDir) -> CustomerStore {
    CustomerStore::new(dir.path().join("test_customers.json"))
}

#[test]
fn create_into_missing_file_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    assert!(!store.path().exists());

    let created = store
        .create(Customer::new(101, "Juan Perez", "juan@mail.com"))
        .unwrap();
    assert_eq!(created.name, "Juan Perez");

    let loaded = store.load();
    assert_eq!(loaded, vec![created]);
}

#[test]
fn create_accepts_duplicate_ids_and_keeps_order() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    store.create(Customer::new(1, "First", "1@mail.com")).unwrap();
    store.create(Customer::new(2, "Second", "2@mail.com")).unwrap();
    store.create(Customer::new(1, "Third", "3@mail.com")).unwrap();

    let names: Vec<String> = store.load().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}

#[test]
fn display_returns_first_match_or_none() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.create(Customer::new(102, "Ana", "ana@mail.com")).unwrap();

    let found = store.display(102).unwrap();
    assert_eq!(found.email, "ana@mail.com");
    assert!(store.display(999).is_none());
}

#[test]
fn modify_overwrites_only_supplied_fields() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store
        .create(Customer::new(103, "Original", "o@mail.com"))
        .unwrap();

    let matched = store
        .modify(103, &CustomerPatch::default().name("Modificado"))
        .unwrap();
    assert!(matched);

    assert_eq!(
        store.load(),
        vec![Customer::new(103, "Modificado", "o@mail.com")]
    );
}

#[test]
fn modify_unknown_id_leaves_collection_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store
        .create(Customer::new(103, "Original", "o@mail.com"))
        .unwrap();
    let before = std::fs::read(store.path()).unwrap();

    let matched = store
        .modify(50, &CustomerPatch::default().email("x@mail.com"))
        .unwrap();
    assert!(!matched);
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[test]
fn delete_removes_every_record_with_the_id() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.create(Customer::new(1, "Dup", "a@mail.com")).unwrap();
    store.create(Customer::new(2, "Keep", "b@mail.com")).unwrap();
    store.create(Customer::new(1, "Dup", "c@mail.com")).unwrap();

    assert_eq!(store.delete(1).unwrap(), 2);
    assert_eq!(store.load(), vec![Customer::new(2, "Keep", "b@mail.com")]);
}

#[test]
fn delete_unknown_id_is_a_silent_no_op() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.create(Customer::new(1, "Ana", "ana@mail.com")).unwrap();
    let before = std::fs::read(store.path()).unwrap();

    assert_eq!(store.delete(99).unwrap(), 0);
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[test]
fn corrupt_file_loads_as_empty_and_try_load_reports_it() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    std::fs::write(store.path(), "esto_no_es_un_json").unwrap();

    assert!(store.load().is_empty());
    assert!(matches!(
        store.try_load(),
        Err(StoreError::Malformed { .. })
    ));
}

#[test]
fn create_over_corrupt_file_starts_a_fresh_collection() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    std::fs::write(store.path(), "not json").unwrap();

    store.create(Customer::new(5, "Eva", "eva@mail.com")).unwrap();
    assert_eq!(store.try_load().unwrap().len(), 1);
}

#[test]
fn save_failure_is_returned_not_raised() {
    let dir = TempDir::new().unwrap();
    let store = CustomerStore::new(dir.path().join("no_such_dir").join("customers.json"));

    let err = store
        .create(Customer::new(1, "Ana", "ana@mail.com"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert!(store.load().is_empty());
}
