//! Aggregate queries over a transaction list.

use crate::ledger::{LedgerState, Transaction, TransactionType};

/// Summed expenses for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Totals for a transaction list. Categories keep first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub expenses_by_category: Vec<CategoryTotal>,
}

impl Summary {
    /// True when a limit is set and total expenses are above it.
    pub fn is_over_budget(&self, limit: f64) -> bool {
        limit > 0.0 && self.total_expenses > limit
    }

    /// `limit - total_expenses`, or `None` while no limit is set.
    pub fn budget_remaining(&self, limit: f64) -> Option<f64> {
        (limit > 0.0).then(|| limit - self.total_expenses)
    }

    pub fn has_expenses(&self) -> bool {
        !self.expenses_by_category.is_empty()
    }

    /// False when both totals are zero, i.e. there is nothing to chart.
    pub fn has_activity(&self) -> bool {
        self.total_income > 0.0 || self.total_expenses > 0.0
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Computes totals in a single pass. Pure and deterministic.
    pub fn summarize(transactions: &[Transaction]) -> Summary {
        let mut total_income = 0.0;
        let mut total_expenses = 0.0;
        let mut expenses_by_category: Vec<CategoryTotal> = Vec::new();

        for txn in transactions {
            match txn.kind() {
                TransactionType::Income => total_income += txn.amount(),
                TransactionType::Expense => {
                    total_expenses += txn.amount();
                    match expenses_by_category
                        .iter()
                        .position(|entry| entry.category == txn.category())
                    {
                        Some(idx) => expenses_by_category[idx].amount += txn.amount(),
                        None => expenses_by_category.push(CategoryTotal {
                            category: txn.category().to_string(),
                            amount: txn.amount(),
                        }),
                    }
                }
            }
        }

        Summary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            expenses_by_category,
        }
    }

    pub fn for_state(state: &LedgerState) -> Summary {
        Self::summarize(state.transactions())
    }
}
