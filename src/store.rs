//! The canonical in-memory state and its enumerated mutator surface.
//!
//! Every mutator follows the same cycle: validate, apply, persist, recompute.
//! Invalid input returns an error with the state untouched and nothing
//! written; a successful call returns the freshly derived [`Totals`] for the
//! rendering layer.

use chrono::Utc;

use crate::{
    backup::BackupDocument,
    calc::{compute_totals, Totals},
    domain::{AppState, Category, Task, Transaction, TransactionInput},
    errors::{DashboardError, Result},
    storage::{FileKvBackend, KvBackend, PersistenceAdapter},
};

/// Single source of truth for one session.
pub struct StateStore<B: KvBackend> {
    state: AppState,
    persistence: PersistenceAdapter<B>,
}

impl StateStore<FileKvBackend> {
    /// Opens a store over the default file-backed data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(FileKvBackend::new_default()?)
    }
}

impl<B: KvBackend> StateStore<B> {
    /// Loads the session state from the backend, falling back to defaults
    /// slice by slice.
    pub fn open(backend: B) -> Result<Self> {
        let persistence = PersistenceAdapter::new(backend);
        let state = persistence.load()?;
        tracing::debug!(
            transactions = state.transactions.len(),
            goals = state.goals.len(),
            "session state loaded"
        );
        Ok(Self { state, persistence })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.state)
    }

    pub(crate) fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Persists the whole state and recomputes totals. Called by every
    /// mutator after its change is applied.
    pub(crate) fn commit(&mut self) -> Result<Totals> {
        self.persistence.save(&self.state)?;
        Ok(compute_totals(&self.state))
    }

    pub fn add_transaction(&mut self, input: TransactionInput) -> Result<Totals> {
        let txn = self.validated_transaction(input)?;
        self.state.transactions.push(txn);
        self.commit()
    }

    /// Replaces the transaction at `index` in place, preserving its position.
    /// The entry date is refreshed, as a form resubmission would.
    pub fn update_transaction(&mut self, index: usize, input: TransactionInput) -> Result<Totals> {
        if index >= self.state.transactions.len() {
            return Err(transaction_not_found(index));
        }
        let txn = self.validated_transaction(input)?;
        self.state.transactions[index] = txn;
        self.commit()
    }

    pub fn delete_transaction(&mut self, index: usize) -> Result<Totals> {
        if index >= self.state.transactions.len() {
            return Err(transaction_not_found(index));
        }
        self.state.transactions.remove(index);
        self.commit()
    }

    pub fn add_task(&mut self, desc: &str) -> Result<Totals> {
        let desc = desc.trim();
        if desc.is_empty() {
            return Err(DashboardError::Validation(
                "task description is empty".into(),
            ));
        }
        let id = self.state.next_task_id();
        self.state.tasks.push(Task {
            id,
            desc: desc.to_string(),
            done: false,
        });
        self.commit()
    }

    pub fn toggle_task(&mut self, id: u64) -> Result<Totals> {
        let task = self
            .state
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| DashboardError::NotFound(format!("task {}", id)))?;
        task.done = !task.done;
        self.commit()
    }

    pub fn delete_task(&mut self, id: u64) -> Result<Totals> {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|task| task.id != id);
        if self.state.tasks.len() == before {
            return Err(DashboardError::NotFound(format!("task {}", id)));
        }
        self.commit()
    }

    pub fn add_category(&mut self, name: &str, color: &str) -> Result<Totals> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DashboardError::Validation("category name is empty".into()));
        }
        let normalized = name.to_lowercase();
        let duplicate = self
            .state
            .categories
            .iter()
            .any(|category| category.name.trim().to_lowercase() == normalized);
        if duplicate {
            return Err(DashboardError::Validation(format!(
                "category `{}` already exists",
                name
            )));
        }
        let id = self.state.next_category_id();
        self.state.categories.push(Category {
            id,
            name: name.to_string(),
            color: color.to_string(),
        });
        self.commit()
    }

    /// Removes a category without touching transactions that still name it;
    /// those entries render with the fallback color from then on.
    pub fn delete_category(&mut self, id: u64) -> Result<Totals> {
        let before = self.state.categories.len();
        self.state.categories.retain(|category| category.id != id);
        if self.state.categories.len() == before {
            return Err(DashboardError::NotFound(format!("category {}", id)));
        }
        self.commit()
    }

    pub fn set_salary(&mut self, value: f64) -> Result<Totals> {
        if !value.is_finite() || value < 0.0 {
            return Err(DashboardError::Validation(format!(
                "salary must be a non-negative number, got {}",
                value
            )));
        }
        self.state.salary = value;
        self.commit()
    }

    pub fn set_pinned_goal(&mut self, goal_id: Option<u64>) -> Result<Totals> {
        if let Some(id) = goal_id {
            if self.state.goal(id).is_none() {
                return Err(DashboardError::NotFound(format!("goal {}", id)));
            }
        }
        self.state.pinned_goal_id = goal_id;
        self.commit()
    }

    /// Restores collections from a backup document, merge-by-presence: each
    /// collection that is present fully replaces its counterpart, absent ones
    /// are left untouched. Salary, the pin, and the document's own summary
    /// block are never imported. Imported records are taken as-is; a pin left
    /// pointing at a goal the document dropped simply reads as unpinned.
    pub fn import_backup(&mut self, document: BackupDocument) -> Result<Totals> {
        let BackupDocument {
            transacoes,
            metas,
            tarefas,
            categorias,
            ..
        } = document;
        if let Some(transactions) = transacoes {
            self.state.transactions = transactions;
        }
        if let Some(goals) = metas {
            self.state.goals = goals;
        }
        if let Some(tasks) = tarefas {
            self.state.tasks = tasks;
        }
        if let Some(categories) = categorias {
            self.state.categories = categories;
        }
        tracing::info!("backup document applied");
        self.commit()
    }

    fn validated_transaction(&self, input: TransactionInput) -> Result<Transaction> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(DashboardError::Validation(
                "transaction description is empty".into(),
            ));
        }
        if !input.amount.is_finite() || input.amount <= 0.0 {
            return Err(DashboardError::Validation(format!(
                "transaction amount must be a positive number, got {}",
                input.amount
            )));
        }
        if self.state.category_by_name(&input.category).is_none() {
            return Err(DashboardError::Validation(format!(
                "unknown category `{}`",
                input.category
            )));
        }
        Ok(Transaction {
            description: description.to_string(),
            amount: input.amount,
            kind: input.kind,
            category: input.category,
            date: Utc::now(),
        })
    }
}

fn transaction_not_found(index: usize) -> DashboardError {
    DashboardError::NotFound(format!("transaction at index {}", index))
}
