//! Business logic for recording transactions.

use crate::core::errors::Result;
use crate::core::services::SummaryService;
use crate::ledger::{LedgerState, Transaction, TransactionType};
use crate::storage::StateStore;

/// Result of a successful addition.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub transaction: Transaction,
    /// Set only for expenses that pushed total expenses past a configured limit.
    pub over_budget: bool,
}

/// Validated, persisted mutations of the transaction list.
pub struct TransactionService;

impl TransactionService {
    /// Validates and appends a transaction stamped with the current time, then persists.
    pub fn add<S>(
        state: &mut LedgerState,
        store: &S,
        kind: TransactionType,
        amount: f64,
        category: &str,
    ) -> Result<AddOutcome>
    where
        S: StateStore + ?Sized,
    {
        let transaction = Transaction::now(kind, amount, category).map_err(|err| {
            tracing::warn!(%kind, amount, error = %err, "rejected transaction");
            err
        })?;
        Self::record(state, store, transaction)
    }

    /// Appends an already validated transaction and persists the state.
    ///
    /// A failed save removes the transaction again so memory matches disk.
    pub fn record<S>(
        state: &mut LedgerState,
        store: &S,
        transaction: Transaction,
    ) -> Result<AddOutcome>
    where
        S: StateStore + ?Sized,
    {
        state.push_transaction(transaction.clone());
        if let Err(err) = store.save(state) {
            state.pop_transaction();
            tracing::error!(error = %err, "failed to persist transaction, rolled back");
            return Err(err);
        }

        let over_budget = transaction.is_expense()
            && SummaryService::for_state(state).is_over_budget(state.budget_limit());
        tracing::debug!(
            kind = %transaction.kind(),
            amount = transaction.amount(),
            category = transaction.category(),
            over_budget,
            "recorded transaction"
        );

        Ok(AddOutcome {
            transaction,
            over_budget,
        })
    }
}
