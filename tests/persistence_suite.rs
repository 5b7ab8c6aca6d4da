use std::fs;

use findash_core::{
    domain::{EntryKind, TransactionInput},
    goals::GoalManager,
    storage::{FileKvBackend, KvBackend, PersistenceAdapter, KEY_GOALS, KEY_SALARY},
    store::StateStore,
};
use tempfile::tempdir;

fn file_store(root: &std::path::Path) -> StateStore<FileKvBackend> {
    let backend = FileKvBackend::new(Some(root.to_path_buf())).expect("backend");
    StateStore::open(backend).expect("open store")
}

#[test]
fn a_session_survives_reopening_the_same_directory() {
    let temp = tempdir().expect("temp dir");

    {
        let mut store = file_store(temp.path());
        store.set_salary(2750.0).expect("set salary");
        store
            .add_transaction(TransactionInput {
                description: "groceries".into(),
                amount: 120.0,
                kind: EntryKind::Expense,
                category: "Alimento".into(),
            })
            .expect("add expense");
        GoalManager::create_goal(&mut store, "Trip", 1000.0).expect("create goal");
        let id = store.state().goals[0].id;
        GoalManager::deposit(&mut store, id, 300.0).expect("deposit");
        GoalManager::toggle_pin(&mut store, id).expect("pin");
    }

    let reopened = file_store(temp.path());
    let state = reopened.state();
    assert_eq!(state.salary, 2750.0);
    assert_eq!(state.transactions.len(), 1);
    assert_eq!(state.goals[0].current, 300.0);
    assert_eq!(state.pinned_goal_id, Some(state.goals[0].id));
    assert_eq!(reopened.totals().available_balance, 2750.0 - 120.0 - 300.0);
}

#[test]
fn each_slice_lives_in_its_own_entry() {
    let temp = tempdir().expect("temp dir");
    {
        let mut store = file_store(temp.path());
        store.set_salary(1800.0).expect("set salary");
    }
    let salary = fs::read_to_string(temp.path().join(KEY_SALARY)).expect("salary entry");
    assert_eq!(salary, "1800");
    assert!(temp.path().join(KEY_GOALS).exists());
}

#[test]
fn a_corrupt_slice_falls_back_without_poisoning_the_rest() {
    let temp = tempdir().expect("temp dir");
    {
        let mut store = file_store(temp.path());
        store.set_salary(900.0).expect("set salary");
        GoalManager::create_goal(&mut store, "Trip", 500.0).expect("create goal");
    }
    fs::write(temp.path().join(KEY_GOALS), "<<corrupt>>").expect("corrupt goals slice");

    let reopened = file_store(temp.path());
    assert!(reopened.state().goals.is_empty());
    assert_eq!(reopened.state().salary, 900.0);
}

#[test]
fn failed_atomic_write_preserves_the_previous_value() {
    let temp = tempdir().expect("temp dir");
    let backend = FileKvBackend::new(Some(temp.path().to_path_buf())).expect("backend");
    backend.set(KEY_SALARY, "1000").expect("initial write");

    // A directory squatting on the staging path forces the write to fail
    // before the rename, so the previous value must survive.
    fs::create_dir_all(temp.path().join("salary.tmp")).expect("squat tmp path");
    assert!(backend.set(KEY_SALARY, "2000").is_err());
    assert_eq!(
        backend.get(KEY_SALARY).expect("get"),
        Some("1000".to_string())
    );
}

#[test]
fn an_empty_directory_loads_the_default_state() {
    let temp = tempdir().expect("temp dir");
    let backend = FileKvBackend::new(Some(temp.path().to_path_buf())).expect("backend");
    let state = PersistenceAdapter::new(backend).load().expect("load");
    assert!(state.transactions.is_empty());
    assert!(state.goals.is_empty());
    assert_eq!(state.salary, 0.0);
    assert_eq!(state.categories.len(), 5);
    assert!(state.pinned_goal_id.is_none());
}
