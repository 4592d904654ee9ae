//! Helpers for a front end that drives the report pipeline.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::Summary;
use crate::types::RANGE_FORMAT;

/// Folder, beside the input file, where suggested reports are saved.
pub const REPORTS_DIR: &str = "Reportes";

/// Suggests `<input dir>/Reportes/reporte_ventas_<timestamp>.xlsx`.
pub fn suggested_output_path(input: &Path, now: NaiveDateTime) -> PathBuf {
    let directory = input.parent().unwrap_or_else(|| Path::new(""));
    let file_name = format!("reporte_ventas_{}.xlsx", now.format("%Y-%m-%d_%H-%M-%S"));

    directory.join(REPORTS_DIR).join(file_name)
}

/// Whole currency units with thousands separators, e.g. `$1,234`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}")
}

/// The four read-only result fields shown after a run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SummaryView {
    pub total_revenue: String,
    pub top_product: String,
    pub peak_day: String,
    pub peak_day_amount: String
}

impl SummaryView {
    /// Label and value pairs, ready for display.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            (Summary::TOTAL_REVENUE, self.total_revenue.as_str()),
            (Summary::TOP_PRODUCT, self.top_product.as_str()),
            (Summary::PEAK_DAY, self.peak_day.as_str()),
            (Summary::PEAK_DAY_AMOUNT, self.peak_day_amount.as_str())
        ]
    }
}

impl From<&Summary> for SummaryView {
    fn from(summary: &Summary) -> Self {
        Self {
            total_revenue: format_currency(summary.total_revenue),
            top_product: summary.top_product.clone(),
            peak_day: summary.peak_day.format(RANGE_FORMAT).to_string(),
            peak_day_amount: format_currency(summary.peak_day_amount)
        }
    }
}
