//! Monthly budget limit management.

use crate::core::errors::{BudgetError, Result};
use crate::ledger::{LedgerState, MAX_AMOUNT};
use crate::storage::StateStore;

pub struct BudgetService;

impl BudgetService {
    /// Sets the monthly limit (0 clears it) and persists.
    pub fn set_limit<S>(state: &mut LedgerState, store: &S, limit: f64) -> Result<()>
    where
        S: StateStore + ?Sized,
    {
        if !limit.is_finite() {
            return Err(BudgetError::InvalidAmount(limit.to_string()));
        }
        if limit < 0.0 {
            tracing::warn!(limit, "rejected negative budget limit");
            return Err(BudgetError::NegativeBudget(limit));
        }
        if limit > MAX_AMOUNT {
            return Err(BudgetError::AmountTooLarge(limit));
        }

        let previous = state.replace_budget_limit(limit);
        if let Err(err) = store.save(state) {
            state.replace_budget_limit(previous);
            tracing::error!(error = %err, "failed to persist budget limit, rolled back");
            return Err(err);
        }
        tracing::debug!(limit, previous, "budget limit updated");
        Ok(())
    }
}
