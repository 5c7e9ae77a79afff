use std::result::Result as StdResult;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Unified error type for core/domain/storage layers.
///
/// The `Display` text of the validation variants is what the shell shows the
/// user, so keep it phrased as an instruction.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Invalid type `{0}`. Please choose 'income' or 'expense'.")]
    InvalidType(String),
    #[error("Invalid amount `{0}`. Please enter a number.")]
    InvalidAmount(String),
    #[error("Amount must be positive.")]
    NonPositiveAmount(f64),
    #[error("Budget limit cannot be negative.")]
    NegativeBudget(f64),
    #[error("Amount is too large. The largest accepted value is {}.", crate::ledger::MAX_AMOUNT)]
    AmountTooLarge(f64),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Chart rendering failed: {0}")]
    ChartError(String),
}

impl BudgetError {
    /// True for errors caused by bad user input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BudgetError::InvalidType(_)
                | BudgetError::InvalidAmount(_)
                | BudgetError::NonPositiveAmount(_)
                | BudgetError::NegativeBudget(_)
                | BudgetError::AmountTooLarge(_)
        )
    }
}

pub type Result<T> = StdResult<T, BudgetError>;

/// Errors that make the interactive shell itself unusable.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("Terminal error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}
