//! Text summaries and chart reports built from the ledger.

pub mod charts;
pub mod summary_view;

use std::path::PathBuf;

use crate::core::errors::Result;
use crate::core::services::SummaryService;
use crate::ledger::LedgerState;

pub use charts::{ChartRenderer, CATEGORY_CHART_FILE, TOTALS_CHART_FILE};
pub use summary_view::{display_summary, render_summary};

/// What a report run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// The ledger has no transactions; no files were written.
    NothingToReport,
    Generated {
        /// Absent when there are no expenses.
        category_chart: Option<PathBuf>,
        /// Absent when income and expenses are both zero.
        totals_chart: Option<PathBuf>,
    },
}

/// Renders both charts for `state`, overwriting earlier files.
pub fn generate_report(state: &LedgerState, renderer: &ChartRenderer) -> Result<ReportOutcome> {
    if state.is_empty() {
        tracing::debug!("report skipped, ledger is empty");
        return Ok(ReportOutcome::NothingToReport);
    }

    let summary = SummaryService::for_state(state);
    let category_chart = renderer.render_category_chart(&summary)?;
    let totals_chart = renderer.render_totals_chart(&summary)?;

    Ok(ReportOutcome::Generated {
        category_chart,
        totals_chart,
    })
}
