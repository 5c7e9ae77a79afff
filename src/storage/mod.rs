pub mod json_backend;

use std::path::Path;

use crate::{core::errors::Result, ledger::LedgerState};

/// Abstraction over the place the ledger state lives between runs.
pub trait StateStore {
    /// Reads the persisted state. Absent or unreadable data yields the empty state.
    fn load(&self) -> LedgerState;

    /// Overwrites the persisted state with `state`.
    fn save(&self, state: &LedgerState) -> Result<()>;

    fn path(&self) -> &Path;
}

pub use json_backend::JsonStore;
