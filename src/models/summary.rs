use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::EnrichedRecords;
use crate::types::{Cell, RANGE_FORMAT};

/// The four headline metrics of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_revenue: Decimal,
    /// Product with the highest summed quantity.
    pub top_product: String,
    /// Date with the highest summed revenue.
    pub peak_day: NaiveDate,
    pub peak_day_amount: Decimal
}

impl Summary {
    pub const TOTAL_REVENUE: &'static str = "Total Revenue";
    pub const TOP_PRODUCT: &'static str = "Top Product";
    pub const PEAK_DAY: &'static str = "Peak Day";
    pub const PEAK_DAY_AMOUNT: &'static str = "Peak Day Amount";

    /// Labelled metric values in report order.
    pub fn metrics(&self) -> [(&'static str, Cell); 4] {
        [
            (Self::TOTAL_REVENUE, Cell::from(self.total_revenue)),
            (Self::TOP_PRODUCT, Cell::Text(self.top_product.clone())),
            (Self::PEAK_DAY, Cell::Text(self.peak_day.format(RANGE_FORMAT).to_string())),
            (Self::PEAK_DAY_AMOUNT, Cell::from(self.peak_day_amount))
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SellerTotal {
    pub seller: String,
    pub revenue: Decimal
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub revenue: Decimal
}

/// Everything the metrics engine produces for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub records: EnrichedRecords,
    pub summary: Summary,
    /// Descending by revenue.
    pub per_seller: Vec<SellerTotal>,
    /// Ascending by date.
    pub per_day: Vec<DayTotal>
}
