use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    core::{errors::Result, utils::ensure_dir},
    ledger::{LedgerState, RepairReport, Transaction},
};

use super::StateStore;

const CORRUPT_SUFFIX: &str = "corrupt";

/// On-disk layout. Rows stay raw so one bad row cannot sink the whole file.
#[derive(Debug, Deserialize)]
struct StoredLedger {
    #[serde(default)]
    transactions: Vec<Value>,
    #[serde(default)]
    budget_limit: Value,
}

impl StoredLedger {
    /// Decodes row by row and repairs the result. Undecodable rows count as
    /// dropped.
    fn into_state(self) -> (LedgerState, RepairReport) {
        let total = self.transactions.len();
        let transactions: Vec<Transaction> = self
            .transactions
            .into_iter()
            .enumerate()
            .filter_map(|(row, raw)| match serde_json::from_value::<Transaction>(raw) {
                Ok(txn) => Some(txn),
                Err(err) => {
                    tracing::warn!(row, error = %err, "skipping unreadable transaction");
                    None
                }
            })
            .collect();
        let unreadable = total - transactions.len();

        // A non-numeric limit becomes NaN, which repair resets to 0.
        let budget_limit = match self.budget_limit {
            Value::Null => 0.0,
            raw => raw.as_f64().unwrap_or(f64::NAN),
        };

        let mut state = LedgerState::from_parts(transactions, budget_limit);
        let mut report = state.repair();
        report.dropped_transactions += unreadable;
        (state, report)
    }
}

/// Stores the ledger state as a single pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where an unparsable data file is copied before it is replaced.
    pub fn corrupt_copy_path(&self) -> PathBuf {
        suffixed_path(&self.path, CORRUPT_SUFFIX)
    }

    fn read_state(&self) -> Option<StoredLedger> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
                return None;
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "data file unreadable, starting empty");
                return None;
            }
        };

        match serde_json::from_str::<StoredLedger>(&data) {
            Ok(stored) => Some(stored),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "data file is malformed, starting empty");
                self.preserve_corrupt_file();
                None
            }
        }
    }

    fn preserve_corrupt_file(&self) {
        let copy = self.corrupt_copy_path();
        match fs::copy(&self.path, &copy) {
            Ok(_) => tracing::warn!(copy = %copy.display(), "kept a copy of the malformed data file"),
            Err(err) => tracing::warn!(error = %err, "could not copy the malformed data file"),
        }
    }
}

impl StateStore for JsonStore {
    fn load(&self) -> LedgerState {
        let Some(stored) = self.read_state() else {
            return LedgerState::default();
        };

        let (state, report) = stored.into_state();
        if report.dropped_transactions > 0 {
            tracing::warn!(
                dropped = report.dropped_transactions,
                "dropped invalid transactions"
            );
        }
        if report.reset_budget_limit {
            tracing::warn!("reset invalid budget limit to 0");
        }
        tracing::info!(
            path = %self.path.display(),
            transactions = state.transaction_count(),
            budget_limit = state.budget_limit(),
            "loaded ledger state"
        );
        state
    }

    fn save(&self, state: &LedgerState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        tracing::info!(
            path = %self.path.display(),
            transactions = state.transaction_count(),
            "saved ledger state"
        );
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

fn suffixed_path(path: &Path, suffix: &str) -> PathBuf {
    let mut out = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, suffix),
        None => suffix.to_string(),
    };
    out.set_extension(ext);
    out
}
