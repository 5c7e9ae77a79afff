#![doc(test(attr(deny(warnings))))]

//! Budget Planner keeps a personal income/expense ledger with a monthly budget
//! limit, and turns it into text summaries and SVG charts.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Budget Planner tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
