pub mod budget_service;
pub mod summary_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use summary_service::{CategoryTotal, Summary, SummaryService};
pub use transaction_service::{AddOutcome, TransactionService};

#[cfg(test)]
mod tests;
