//! Portable backup documents for manual export and import.
//!
//! The document keeps the field names of the original dashboard exports
//! (`transacoes`, `metas`, `tarefas`, `categorias`, `resumo`) so existing
//! backups stay importable. Every collection field is optional on import;
//! export always fills all of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    calc::{compute_totals, Totals},
    domain::{AppState, Category, Goal, Task, Transaction},
    errors::{DashboardError, Result},
};

const EXPORT_NOTE: &str = "Backup of the household finance dashboard. On import, each \
collection present here fully replaces its counterpart; `resumo` and `timestamp` are \
informational only and are never re-imported.";

/// Snapshot of the tracked collections plus derived totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrucoes_ia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resumo: Option<Totals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transacoes: Option<Vec<Transaction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metas: Option<Vec<Goal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tarefas: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categorias: Option<Vec<Category>>,
}

impl BackupDocument {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a document from JSON, rejecting anything that is not a
    /// well-formed document of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| DashboardError::Parse(err.to_string()))
    }
}

/// Produces a full backup of the current state, transaction order preserved.
pub fn export_backup(state: &AppState) -> BackupDocument {
    BackupDocument {
        instrucoes_ia: Some(EXPORT_NOTE.to_string()),
        timestamp: Some(Utc::now()),
        resumo: Some(compute_totals(state)),
        transacoes: Some(state.transactions.clone()),
        metas: Some(state.goals.clone()),
        tarefas: Some(state.tasks.clone()),
        categorias: Some(state.categories.clone()),
    }
}
