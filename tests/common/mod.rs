#![allow(dead_code)]

use budget_planner::{
    ledger::{Transaction, TransactionType},
    storage::JsonStore,
};
use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

/// Creates a store backed by a fresh temporary directory.
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn temp_store() -> (TempDir, JsonStore) {
    let temp = TempDir::new().expect("create temp dir");
    let store = JsonStore::new(temp.path().join("budget_data.json"));
    (temp, store)
}

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .unwrap()
        .and_hms_opt(hour, 15, 0)
        .unwrap()
}

pub fn txn(kind: TransactionType, amount: f64, category: &str, day: u32) -> Transaction {
    Transaction::new(kind, amount, category, at(day, 10)).expect("valid transaction")
}
