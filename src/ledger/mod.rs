//! Ledger domain models: transactions and the persisted ledger state.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use ledger::{LedgerState, RepairReport};
pub use transaction::{parse_amount, Transaction, TransactionType, MAX_AMOUNT, UNCATEGORIZED};
