//! SVG chart rendering for the visual report.

use std::{
    f64::consts::{PI, TAU},
    fmt,
    path::{Path, PathBuf},
};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::Config;
use crate::core::errors::{BudgetError, Result};
use crate::core::services::Summary;
use crate::currency::{format_currency_value, format_percentage};

pub const CATEGORY_CHART_FILE: &str = "expense_pie_chart.svg";
pub const TOTALS_CHART_FILE: &str = "income_expense_savings_bar_chart.svg";

const FONT: &str = "sans-serif";
// Matches the familiar "start at 140 degrees, counter-clockwise" pie layout.
const PIE_START_DEGREES: f64 = 140.0;

const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

fn chart_error(err: impl fmt::Display) -> BudgetError {
    BudgetError::ChartError(err.to_string())
}

/// Writes the report charts into a fixed directory.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    dir: PathBuf,
    size: (u32, u32),
    symbol: String,
}

impl ChartRenderer {
    pub fn new(dir: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            dir: dir.into(),
            size: config.chart_size(),
            symbol: config.currency_symbol.clone(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn category_chart_path(&self) -> PathBuf {
        self.dir.join(CATEGORY_CHART_FILE)
    }

    pub fn totals_chart_path(&self) -> PathBuf {
        self.dir.join(TOTALS_CHART_FILE)
    }

    /// Pie of expense share per category. `None` when there are no expenses.
    pub fn render_category_chart(&self, summary: &Summary) -> Result<Option<PathBuf>> {
        if !summary.has_expenses() || summary.total_expenses <= 0.0 {
            return Ok(None);
        }
        if !summary.total_expenses.is_finite() {
            return Err(chart_error("expense total is too large to chart"));
        }
        crate::core::utils::ensure_dir(&self.dir)?;
        let path = self.category_chart_path();
        self.draw_category_chart(&path, summary)?;
        tracing::info!(path = %path.display(), "wrote category chart");
        Ok(Some(path))
    }

    fn draw_category_chart(&self, path: &Path, summary: &Summary) -> Result<()> {
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;
        let area = root
            .titled(
                "Expense Distribution by Category",
                (FONT, 24).into_font().color(&BLACK),
            )
            .map_err(chart_error)?;

        let (width, height) = area.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.35;
        let total = summary.total_expenses;

        let mut start = PIE_START_DEGREES.to_radians();
        for (idx, entry) in summary.expenses_by_category.iter().enumerate() {
            let sweep = entry.amount / total * TAU;
            let color = PALETTE[idx % PALETTE.len()];
            area.draw(&Polygon::new(
                wedge_points(center, radius, start, sweep),
                color.filled(),
            ))
            .map_err(chart_error)?;

            let mid = start + sweep / 2.0;
            let anchor = if mid.cos() >= 0.0 { HPos::Left } else { HPos::Right };
            let label = format!(
                "{} ({})",
                entry.category,
                format_percentage(entry.amount, total)
            );
            let style = (FONT, 16)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(anchor, VPos::Center));
            area.draw(&Text::new(
                label,
                polar(center, radius * 1.12, mid),
                style,
            ))
            .map_err(chart_error)?;

            start += sweep;
        }

        root.present().map_err(chart_error)?;
        Ok(())
    }

    /// Bars for income, expenses and, when positive, savings.
    /// `None` when both totals are zero.
    pub fn render_totals_chart(&self, summary: &Summary) -> Result<Option<PathBuf>> {
        if !summary.has_activity() {
            return Ok(None);
        }
        crate::core::utils::ensure_dir(&self.dir)?;
        let path = self.totals_chart_path();
        self.draw_totals_chart(&path, summary)?;
        tracing::info!(path = %path.display(), "wrote totals chart");
        Ok(Some(path))
    }

    fn draw_totals_chart(&self, path: &Path, summary: &Summary) -> Result<()> {
        let mut bars = vec![
            ("Income", summary.total_income, GREEN),
            ("Expenses", summary.total_expenses, RED),
        ];
        if summary.balance > 0.0 {
            bars.push(("Savings", summary.balance, BLUE));
        }
        let labels: Vec<&str> = bars.iter().map(|(label, _, _)| *label).collect();
        let peak = bars
            .iter()
            .map(|(_, value, _)| *value)
            .fold(0.0_f64, f64::max);
        let top = peak * 1.15;
        if !top.is_finite() {
            return Err(chart_error("totals are too large to chart"));
        }
        let symbol = self.symbol.as_str();

        let root = SVGBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Income vs. Expenses vs. Savings",
                (FONT, 24).into_font().color(&BLACK),
            )
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(90)
            .build_cartesian_2d((0..bars.len() as i32).into_segmented(), 0.0..top)
            .map_err(chart_error)?;

        let x_formatter = |value: &SegmentValue<i32>| match value {
            SegmentValue::CenterOf(idx) => labels
                .get(*idx as usize)
                .map(|label| label.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };
        let y_formatter = |value: &f64| format_currency_value(*value, symbol);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bars.len())
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .y_desc(format!("Amount ({})", symbol))
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(bars.iter().enumerate().map(|(idx, (_, value, color))| {
                let idx = idx as i32;
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(idx), 0.0),
                        (SegmentValue::Exact(idx + 1), *value),
                    ],
                    color.filled(),
                );
                bar.set_margin(0, 0, 20, 20);
                bar
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
        Ok(())
    }
}

fn polar(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    // Screen y grows downwards, so counter-clockwise angles subtract from y.
    (
        center.0 + (radius * angle.cos()).round() as i32,
        center.1 - (radius * angle.sin()).round() as i32,
    )
}

fn wedge_points(center: (i32, i32), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep / (PI / 90.0)).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64;
        points.push(polar(center, radius, angle));
    }
    points
}
