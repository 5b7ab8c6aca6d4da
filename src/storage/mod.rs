//! Persistence layer: a durable key-value store with one entry per state
//! slice, and the adapter that (de)serializes each slice independently.

pub mod kv;

use serde::{de::DeserializeOwned, Serialize};

use crate::{domain::AppState, errors::Result};

pub use kv::{FileKvBackend, MemoryKvBackend};

pub const KEY_TRANSACTIONS: &str = "transactions";
pub const KEY_GOALS: &str = "goals";
pub const KEY_SALARY: &str = "salary";
pub const KEY_PINNED_GOAL: &str = "pinnedGoalId";
pub const KEY_TASKS: &str = "tasks";
pub const KEY_CATEGORIES: &str = "categories";

/// Abstraction over durable string key-value stores.
///
/// The store is treated as exclusively owned by the running session; there is
/// no cross-process coordination and concurrent writers are out of scope.
pub trait KvBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads and writes [`AppState`] one slice at a time.
///
/// Loading is lenient: a missing or malformed slice is logged and replaced by
/// its fallback (empty collections, zero salary, unpinned, or the built-in
/// categories) rather than failing the whole session.
pub struct PersistenceAdapter<B> {
    backend: B,
}

impl<B: KvBackend> PersistenceAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Writes every slice of the state.
    pub fn save(&self, state: &AppState) -> Result<()> {
        self.write_json(KEY_TRANSACTIONS, &state.transactions)?;
        self.write_json(KEY_GOALS, &state.goals)?;
        self.write_json(KEY_TASKS, &state.tasks)?;
        self.write_json(KEY_CATEGORIES, &state.categories)?;
        self.backend.set(KEY_SALARY, &state.salary.to_string())?;
        match state.pinned_goal_id {
            Some(id) => self.backend.set(KEY_PINNED_GOAL, &id.to_string())?,
            None => self.backend.remove(KEY_PINNED_GOAL)?,
        }
        Ok(())
    }

    /// Loads the state, slice by slice, with per-slice fallbacks.
    pub fn load(&self) -> Result<AppState> {
        let defaults = AppState::default();
        Ok(AppState {
            transactions: self
                .read_json(KEY_TRANSACTIONS)?
                .unwrap_or(defaults.transactions),
            goals: self.read_json(KEY_GOALS)?.unwrap_or(defaults.goals),
            tasks: self.read_json(KEY_TASKS)?.unwrap_or(defaults.tasks),
            categories: self
                .read_json(KEY_CATEGORIES)?
                .unwrap_or(defaults.categories),
            salary: self.read_salary()?,
            pinned_goal_id: self.read_pinned_goal()?,
        })
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.backend.set(key, &serde_json::to_string(value)?)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(key, %err, "discarding malformed state slice");
                Ok(None)
            }
        }
    }

    fn read_salary(&self) -> Result<f64> {
        let Some(raw) = self.backend.get(KEY_SALARY)? else {
            return Ok(0.0);
        };
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
            _ => {
                tracing::warn!(raw, "discarding malformed salary entry");
                Ok(0.0)
            }
        }
    }

    fn read_pinned_goal(&self) -> Result<Option<u64>> {
        let Some(raw) = self.backend.get(KEY_PINNED_GOAL)? else {
            return Ok(None);
        };
        // The original frontend persisted the literal string "null"; any
        // non-numeric value reads as unpinned.
        Ok(raw.trim().parse::<u64>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Goal, Task};

    #[test]
    fn save_then_load_round_trips_all_slices() {
        let adapter = PersistenceAdapter::new(MemoryKvBackend::new());
        let state = AppState {
            goals: vec![Goal {
                id: 3,
                name: "Reserva".into(),
                target: 900.0,
                current: 150.0,
            }],
            tasks: vec![Task {
                id: 1,
                desc: "pagar contas".into(),
                done: false,
            }],
            salary: 2750.5,
            pinned_goal_id: Some(3),
            ..AppState::default()
        };
        adapter.save(&state).expect("save");
        let loaded = adapter.load().expect("load");
        assert_eq!(loaded, state);
    }

    #[test]
    fn malformed_slices_fall_back_without_failing_the_load() {
        let backend = MemoryKvBackend::new()
            .seed(KEY_TRANSACTIONS, "{not json")
            .seed(KEY_SALARY, "a lot")
            .seed(KEY_PINNED_GOAL, "null");
        let adapter = PersistenceAdapter::new(backend);
        let loaded = adapter.load().expect("load");
        assert!(loaded.transactions.is_empty());
        assert_eq!(loaded.salary, 0.0);
        assert!(loaded.pinned_goal_id.is_none());
        // Absent categories fall back to the built-ins.
        assert_eq!(loaded.categories.len(), 5);
    }

    #[test]
    fn unpinning_removes_the_stored_entry() {
        let adapter = PersistenceAdapter::new(MemoryKvBackend::new());
        let mut state = AppState {
            pinned_goal_id: Some(9),
            ..AppState::default()
        };
        adapter.save(&state).expect("save pinned");
        assert!(adapter
            .backend()
            .get(KEY_PINNED_GOAL)
            .expect("get")
            .is_some());

        state.pinned_goal_id = None;
        adapter.save(&state).expect("save unpinned");
        assert!(adapter
            .backend()
            .get(KEY_PINNED_GOAL)
            .expect("get")
            .is_none());
    }
}
