use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, MAX_AMOUNT};

/// Everything the planner persists: the transaction history and the budget limit.
///
/// Transactions are kept in insertion order, which is also chronological order.
/// A `budget_limit` of zero means no limit is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    budget_limit: f64,
}

/// What [`LedgerState::repair`] had to fix in freshly loaded data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepairReport {
    pub dropped_transactions: usize,
    pub reset_budget_limit: bool,
}

impl RepairReport {
    pub fn is_clean(&self) -> bool {
        self.dropped_transactions == 0 && !self.reset_budget_limit
    }
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a state from already decoded parts. Call [`LedgerState::repair`]
    /// before trusting it.
    pub(crate) fn from_parts(transactions: Vec<Transaction>, budget_limit: f64) -> Self {
        Self {
            transactions,
            budget_limit,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn budget_limit(&self) -> f64 {
        self.budget_limit
    }

    pub fn has_budget(&self) -> bool {
        self.budget_limit > 0.0
    }

    pub(crate) fn push_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub(crate) fn pop_transaction(&mut self) -> Option<Transaction> {
        self.transactions.pop()
    }

    /// Replaces the limit and returns the previous one.
    pub(crate) fn replace_budget_limit(&mut self, limit: f64) -> f64 {
        std::mem::replace(&mut self.budget_limit, limit)
    }

    /// Drops transactions and limits that break the ledger invariants.
    pub(crate) fn repair(&mut self) -> RepairReport {
        let before = self.transactions.len();
        self.transactions.retain(Transaction::is_valid);
        let dropped_transactions = before - self.transactions.len();

        let reset_budget_limit = !self.budget_limit.is_finite()
            || self.budget_limit < 0.0
            || self.budget_limit > MAX_AMOUNT;
        if reset_budget_limit {
            self.budget_limit = 0.0;
        }

        RepairReport {
            dropped_transactions,
            reset_budget_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionType;

    #[test]
    fn missing_fields_default_to_empty_state() {
        let state: LedgerState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, LedgerState::new());
        assert!(!state.has_budget());
    }

    #[test]
    fn repair_drops_invalid_rows() {
        let raw = r#"{
            "transactions": [
                {"type": "income", "amount": 100.0, "category": "Salary", "timestamp": "2024-01-01 08:00:00"},
                {"type": "expense", "amount": -4.0, "category": "Food", "timestamp": "2024-01-02 08:00:00"},
                {"type": "expense", "amount": 0, "category": "Food", "timestamp": "2024-01-03 08:00:00"}
            ],
            "budget_limit": -10
        }"#;
        let mut state: LedgerState = serde_json::from_str(raw).unwrap();
        let report = state.repair();
        assert_eq!(report.dropped_transactions, 2);
        assert!(report.reset_budget_limit);
        assert_eq!(state.transaction_count(), 1);
        assert_eq!(state.transactions()[0].kind(), TransactionType::Income);
        assert_eq!(state.budget_limit(), 0.0);
    }

    #[test]
    fn repair_leaves_clean_state_alone() {
        let mut state = LedgerState::new();
        state.replace_budget_limit(250.0);
        assert!(state.repair().is_clean());
        assert_eq!(state.budget_limit(), 250.0);
    }
}
