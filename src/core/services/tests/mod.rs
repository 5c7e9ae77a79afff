use std::{
    cell::{Cell, RefCell},
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::errors::{BudgetError, Result};
use crate::ledger::{LedgerState, Transaction, TransactionType};
use crate::storage::StateStore;


/// In-memory store that records every save and can be told to fail.
struct MemoryStore {
    path: PathBuf,
    saved: RefCell<Option<LedgerState>>,
    saves: Cell<usize>,
    fail: Cell<bool>,
}

impl MemoryStore {
    fn new() -> Self {
        Self {
            path: PathBuf::from("memory.json"),
            saved: RefCell::new(None),
            saves: Cell::new(0),
            fail: Cell::new(false),
        }
    }

    fn failing() -> Self {
        let store = Self::new();
        store.fail.set(true);
        store
    }

    fn save_count(&self) -> usize {
        self.saves.get()
    }

    fn last_saved(&self) -> Option<LedgerState> {
        self.saved.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> LedgerState {
        self.last_saved().unwrap_or_default()
    }

    fn save(&self, state: &LedgerState) -> Result<()> {
        if self.fail.get() {
            return Err(BudgetError::StorageError("disk unavailable".into()));
        }
        self.saves.set(self.saves.get() + 1);
        *self.saved.borrow_mut() = Some(state.clone());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

fn at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn income(amount: f64, category: &str, day: u32) -> Transaction {
    Transaction::new(TransactionType::Income, amount, category, at(day)).unwrap()
}

fn expense(amount: f64, category: &str, day: u32) -> Transaction {
    Transaction::new(TransactionType::Expense, amount, category, at(day)).unwrap()
}
