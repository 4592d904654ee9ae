use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Schema;
use crate::types::{Cell, SourceRow};

/// A fully typed sales transaction with its derived line total.
///
/// `cells` keeps the original row so that extra columns reach the report unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    /// Row number in the source sheet.
    pub source_row: SourceRow,
    pub date: NaiveDate,
    pub seller: String,
    pub product: String,
    pub quantity: Decimal,
    pub price: Decimal,
    /// `quantity * price`.
    pub line_total: Decimal,
    pub cells: Vec<Cell>
}

/// The filtered transaction set with `line_total` added to every record.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecords {
    pub headers: Vec<String>,
    pub schema: Schema,
    pub records: Vec<SaleRecord>
}

impl EnrichedRecords {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
