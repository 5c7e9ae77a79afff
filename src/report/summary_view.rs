use std::fmt::Write;

use crate::core::services::SummaryService;
use crate::currency::format_currency_value;
use crate::ledger::LedgerState;

pub const NO_TRANSACTIONS: &str = "No transactions yet. Add one to see a summary.";
pub const NO_EXPENSES: &str = "No expenses recorded yet.";

/// Builds the financial summary text shown by the "View financial summary" action.
pub fn render_summary(state: &LedgerState, symbol: &str) -> String {
    if state.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }

    let summary = SummaryService::for_state(state);
    let money = |amount: f64| format_currency_value(amount, symbol);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "--- Financial Summary ---");
    let _ = writeln!(out, "Total Income:     {}", money(summary.total_income));
    let _ = writeln!(out, "Total Expenses:   {}", money(summary.total_expenses));
    let _ = writeln!(out, "Current Balance:  {}", money(summary.balance));
    if let Some(remaining) = summary.budget_remaining(state.budget_limit()) {
        let _ = writeln!(out, "Monthly Budget:   {}", money(state.budget_limit()));
        let _ = writeln!(out, "Budget Remaining: {}", money(remaining));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Expense Breakdown by Category ---");
    if summary.has_expenses() {
        for entry in &summary.expenses_by_category {
            let _ = writeln!(out, "- {}: {}", entry.category, money(entry.amount));
        }
    } else {
        let _ = writeln!(out, "{}", NO_EXPENSES);
    }
    out.push_str("-------------------------------------");
    out
}

/// Prints the summary to stdout.
pub fn display_summary(state: &LedgerState, symbol: &str) {
    println!("\n{}", render_summary(state, symbol));
}
