use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// A single income or expense entry.
///
/// Transactions carry no id of their own: identity is the positional index
/// within [`crate::domain::AppState::transactions`], and edits and deletions
/// address entries by that index. The category reference is soft, by name;
/// see [`crate::domain::AppState::category_color`] for the lookup fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: String,
    pub date: DateTime<Utc>,
}

/// User-supplied fields for creating or replacing a transaction.
///
/// The store validates these and stamps the entry date itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionInput {
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub category: String,
}
