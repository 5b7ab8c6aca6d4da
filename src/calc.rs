//! Pure derivation of summary metrics from the current state.
//!
//! No I/O and no side effects; the store calls [`compute_totals`] after every
//! successful mutation and hands the result to the rendering layer.

use serde::{Deserialize, Serialize};

use crate::domain::{AppState, EntryKind};

/// Derived financial metrics.
///
/// Serialized field names match the summary block of the exported backup
/// document, so the struct is embedded there unchanged. All fields default
/// on deserialization; the summary is informational and never re-imported.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    /// Base salary plus extra income entries.
    #[serde(rename = "totalIncome", default)]
    pub total_income: f64,
    /// Sum of income transactions alone, excluding salary.
    #[serde(rename = "incomeTransactions", default)]
    pub income_total: f64,
    /// Sum of expense transactions.
    #[serde(rename = "expenseTransactions", default)]
    pub expense_total: f64,
    /// Money reserved across all goals.
    #[serde(rename = "totalSavedInGoals", default)]
    pub total_reserved: f64,
    /// Freely spendable money: income minus expenses minus reservations.
    #[serde(rename = "availableBalance", default)]
    pub available_balance: f64,
    /// Income minus expenses, reserved funds included since they stay owned.
    #[serde(rename = "netWorth", default)]
    pub net_worth: f64,
}

/// Computes the summary metrics for a state snapshot.
///
/// Invariant: `net_worth == available_balance + total_reserved`.
pub fn compute_totals(state: &AppState) -> Totals {
    let expense_total = sum_amounts(state, EntryKind::Expense);
    let income_total = sum_amounts(state, EntryKind::Income);
    let total_reserved: f64 = state.goals.iter().map(|goal| goal.current).sum();

    let total_income = state.salary + income_total;
    let available_balance = total_income - expense_total - total_reserved;
    let net_worth = total_income - expense_total;

    Totals {
        total_income,
        income_total,
        expense_total,
        total_reserved,
        available_balance,
        net_worth,
    }
}

/// Expense sums grouped by category name, in first-appearance order.
///
/// Feed for the distribution chart; unknown category names pass through
/// untouched so the renderer can apply its fallback color.
pub fn expenses_by_category(state: &AppState) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64)> = Vec::new();
    for txn in &state.transactions {
        if txn.kind != EntryKind::Expense {
            continue;
        }
        match groups.iter_mut().find(|(name, _)| *name == txn.category) {
            Some((_, sum)) => *sum += txn.amount,
            None => groups.push((txn.category.clone(), txn.amount)),
        }
    }
    groups
}

fn sum_amounts(state: &AppState, kind: EntryKind) -> f64 {
    state
        .transactions
        .iter()
        .filter(|txn| txn.kind == kind)
        .map(|txn| txn.amount)
        .sum()
}
