use serde::{Deserialize, Serialize};

use crate::domain::{
    category::{default_categories, Category, FALLBACK_COLOR},
    goal::Goal,
    task::Task,
    transaction::Transaction,
};

/// Aggregate root for one session of tracked data.
///
/// Created once by loading from the persistence layer and owned by the
/// [`crate::store::StateStore`] for the rest of the process lifetime. All
/// mutation goes through named store operations; this type only carries the
/// data and the lookups that may fail softly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
    pub salary: f64,
    pub pinned_goal_id: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            goals: Vec::new(),
            tasks: Vec::new(),
            categories: default_categories(),
            salary: 0.0,
            pinned_goal_id: None,
        }
    }
}

impl AppState {
    pub fn goal(&self, id: u64) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn goal_mut(&mut self, id: u64) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| goal.id == id)
    }

    /// The pinned goal, if the pin is set and still resolves.
    ///
    /// A pin left dangling by a lenient import reads as unpinned.
    pub fn pinned_goal(&self) -> Option<&Goal> {
        self.pinned_goal_id.and_then(|id| self.goal(id))
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Display color for a category name, falling back when the category
    /// was deleted out from under its transactions.
    pub fn category_color(&self, name: &str) -> &str {
        self.category_by_name(name)
            .map_or(FALLBACK_COLOR, |category| category.color.as_str())
    }

    pub(crate) fn next_goal_id(&self) -> u64 {
        next_id(self.goals.iter().map(|goal| goal.id))
    }

    pub(crate) fn next_task_id(&self) -> u64 {
        next_id(self.tasks.iter().map(|task| task.id))
    }

    pub(crate) fn next_category_id(&self) -> u64 {
        next_id(self.categories.iter().map(|category| category.id))
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}
