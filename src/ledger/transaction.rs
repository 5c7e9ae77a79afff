use std::{fmt, str::FromStr};

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::errors::{BudgetError, Result};

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Upper bound for transaction amounts and the budget limit. Keeps every
/// total comfortably finite.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = BudgetError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(BudgetError::InvalidType(raw.trim().to_string())),
        }
    }
}

/// A single recorded income or expense event. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    kind: TransactionType,
    amount: f64,
    category: String,
    #[serde(with = "timestamp_format")]
    timestamp: NaiveDateTime,
}

impl Transaction {
    /// Builds a validated transaction. The amount must be positive and at most
    /// [`MAX_AMOUNT`].
    pub fn new(
        kind: TransactionType,
        amount: f64,
        category: &str,
        timestamp: NaiveDateTime,
    ) -> Result<Self> {
        validate_amount(amount)?;
        Ok(Self {
            kind,
            amount,
            category: normalize_category(category),
            // Persisted with second precision; keep memory identical to disk.
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
        })
    }

    /// Builds a transaction stamped with the current local time.
    pub fn now(kind: TransactionType, amount: f64, category: &str) -> Result<Self> {
        Self::new(kind, amount, category, Local::now().naive_local())
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.amount.is_finite() && self.amount > 0.0 && self.amount <= MAX_AMOUNT
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(BudgetError::InvalidAmount(amount.to_string()));
    }
    if amount <= 0.0 {
        return Err(BudgetError::NonPositiveAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(BudgetError::AmountTooLarge(amount));
    }
    Ok(())
}

fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses user-entered amount text. Sign is not checked here.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| BudgetError::InvalidAmount(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(BudgetError::InvalidAmount(trimmed.to_string()));
    }
    Ok(value)
}

mod timestamp_format {
    use chrono::{NaiveDateTime, Timelike};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    // Accepted on load only. `%.f` also matches a missing fraction.
    const READ_FORMATS: [&str; 3] = [FORMAT, "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        READ_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|parsed| parsed.with_nanosecond(0).unwrap_or(parsed))
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp `{raw}`")))
    }
}
