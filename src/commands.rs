//! Command-dispatch interface over the store and goal manager.
//!
//! UI shells hand mutations over as data instead of calling mutators
//! directly, which keeps the presentation layer and the core independently
//! testable. One variant per mutator; dispatching returns the same derived
//! totals the underlying operation would.

use serde::{Deserialize, Serialize};

use crate::{
    backup::BackupDocument,
    calc::Totals,
    domain::{EntryKind, TransactionInput},
    errors::Result,
    goals::GoalManager,
    storage::KvBackend,
    store::StateStore,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    AddTransaction {
        description: String,
        amount: f64,
        kind: EntryKind,
        category: String,
    },
    UpdateTransaction {
        index: usize,
        description: String,
        amount: f64,
        kind: EntryKind,
        category: String,
    },
    DeleteTransaction {
        index: usize,
    },
    AddGoal {
        name: String,
        target: f64,
    },
    DepositToGoal {
        goal_id: u64,
        amount: f64,
    },
    DeleteGoal {
        goal_id: u64,
    },
    TogglePin {
        goal_id: u64,
    },
    SetPinnedGoal {
        goal_id: Option<u64>,
    },
    AddTask {
        desc: String,
    },
    ToggleTask {
        id: u64,
    },
    DeleteTask {
        id: u64,
    },
    AddCategory {
        name: String,
        color: String,
    },
    DeleteCategory {
        id: u64,
    },
    SetSalary {
        value: f64,
    },
    ImportBackup {
        document: BackupDocument,
    },
}

/// Routes a command to the matching store or goal-manager operation.
pub fn dispatch<B: KvBackend>(store: &mut StateStore<B>, command: Command) -> Result<Totals> {
    match command {
        Command::AddTransaction {
            description,
            amount,
            kind,
            category,
        } => store.add_transaction(TransactionInput {
            description,
            amount,
            kind,
            category,
        }),
        Command::UpdateTransaction {
            index,
            description,
            amount,
            kind,
            category,
        } => store.update_transaction(
            index,
            TransactionInput {
                description,
                amount,
                kind,
                category,
            },
        ),
        Command::DeleteTransaction { index } => store.delete_transaction(index),
        Command::AddGoal { name, target } => GoalManager::create_goal(store, &name, target),
        Command::DepositToGoal { goal_id, amount } => GoalManager::deposit(store, goal_id, amount),
        Command::DeleteGoal { goal_id } => GoalManager::delete_goal(store, goal_id),
        Command::TogglePin { goal_id } => GoalManager::toggle_pin(store, goal_id),
        Command::SetPinnedGoal { goal_id } => store.set_pinned_goal(goal_id),
        Command::AddTask { desc } => store.add_task(&desc),
        Command::ToggleTask { id } => store.toggle_task(id),
        Command::DeleteTask { id } => store.delete_task(id),
        Command::AddCategory { name, color } => store.add_category(&name, &color),
        Command::DeleteCategory { id } => store.delete_category(id),
        Command::SetSalary { value } => store.set_salary(value),
        Command::ImportBackup { document } => store.import_backup(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_deserialize_from_tagged_json() {
        let command: Command =
            serde_json::from_str(r#"{ "command": "set_salary", "value": 3000.0 }"#)
                .expect("command json");
        assert_eq!(command, Command::SetSalary { value: 3000.0 });
    }

    #[test]
    fn pin_commands_accept_a_null_goal_id() {
        let command: Command =
            serde_json::from_str(r#"{ "command": "set_pinned_goal", "goal_id": null }"#)
                .expect("command json");
        assert_eq!(command, Command::SetPinnedGoal { goal_id: None });
    }
}
