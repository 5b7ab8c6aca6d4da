use serde::{Deserialize, Serialize};

/// A simple checklist item tracked alongside the finances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    pub desc: String,
    pub done: bool,
}
