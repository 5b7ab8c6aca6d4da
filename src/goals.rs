//! Goal lifecycle operations layered on the state store.
//!
//! Deposits enforce the balance constraint: money can only move into a goal
//! if it is available *before* the deposit, so reservations never exceed what
//! the ledger actually covers.

use crate::{
    calc::Totals,
    domain::Goal,
    errors::{DashboardError, Result},
    storage::KvBackend,
    store::StateStore,
};

pub struct GoalManager;

impl GoalManager {
    pub fn create_goal<B: KvBackend>(
        store: &mut StateStore<B>,
        name: &str,
        target: f64,
    ) -> Result<Totals> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DashboardError::Validation("goal name is empty".into()));
        }
        if !target.is_finite() || target <= 0.0 {
            return Err(DashboardError::Validation(format!(
                "goal target must be a positive number, got {}",
                target
            )));
        }
        let id = store.state().next_goal_id();
        store.state_mut().goals.push(Goal {
            id,
            name: name.to_string(),
            target,
            current: 0.0,
        });
        store.commit()
    }

    /// Moves `amount` from the available balance into the goal's reservation.
    ///
    /// The funds check uses the pre-deposit balance, so depositing exactly
    /// the available balance succeeds and drains it to zero.
    pub fn deposit<B: KvBackend>(
        store: &mut StateStore<B>,
        goal_id: u64,
        amount: f64,
    ) -> Result<Totals> {
        if store.state().goal(goal_id).is_none() {
            return Err(goal_not_found(goal_id));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DashboardError::Validation(format!(
                "deposit amount must be a positive number, got {}",
                amount
            )));
        }
        let available = store.totals().available_balance;
        if amount > available {
            return Err(DashboardError::InsufficientFunds {
                requested: amount,
                available,
            });
        }
        let goal = store
            .state_mut()
            .goal_mut(goal_id)
            .ok_or_else(|| goal_not_found(goal_id))?;
        goal.current += amount;
        store.commit()
    }

    /// Removes a goal. If it was pinned, the pin is cleared in the same
    /// mutation; there is no intermediate state with a dangling pin.
    pub fn delete_goal<B: KvBackend>(store: &mut StateStore<B>, goal_id: u64) -> Result<Totals> {
        let state = store.state_mut();
        let before = state.goals.len();
        state.goals.retain(|goal| goal.id != goal_id);
        if state.goals.len() == before {
            return Err(goal_not_found(goal_id));
        }
        if state.pinned_goal_id == Some(goal_id) {
            state.pinned_goal_id = None;
        }
        store.commit()
    }

    /// Pins the goal, or unpins it when it is already the pinned one.
    pub fn toggle_pin<B: KvBackend>(store: &mut StateStore<B>, goal_id: u64) -> Result<Totals> {
        if store.state().goal(goal_id).is_none() {
            return Err(goal_not_found(goal_id));
        }
        let state = store.state_mut();
        state.pinned_goal_id = if state.pinned_goal_id == Some(goal_id) {
            None
        } else {
            Some(goal_id)
        };
        store.commit()
    }
}

fn goal_not_found(goal_id: u64) -> DashboardError {
    DashboardError::NotFound(format!("goal {}", goal_id))
}
