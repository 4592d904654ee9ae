use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::errors::ReportError;
use crate::models::{DatedRow, DayTotal, EnrichedRecords, FilteredRecords, Metrics, SaleRecord, Schema, SellerTotal, Summary};
use crate::types::{Column, DataError};

/// Computes line totals, the four summary metrics and both aggregates.
///
/// Ties are settled deterministically: the earliest date wins Peak Day, and the
/// first product or seller to appear in the source wins Top Product and the
/// per-seller ordering.
///
/// # Errors
/// Returns `ReportError::Data` if any quantity or price is not numeric or lies
/// outside the `Decimal` range, a total overflows, or there are no records to
/// aggregate. Nothing is returned partially.
pub fn compute(filtered: FilteredRecords) -> Result<Metrics, ReportError> {
    let FilteredRecords { headers, schema, rows } = filtered;

    let records = rows.into_iter()
        .map(|row| enrich(row, &schema))
        .collect::<Result<Vec<_>, DataError>>()?;

    let mut per_day = BTreeMap::<NaiveDate, Decimal>::new();
    let mut per_seller = Tally::<String>::default();
    let mut per_product = Tally::<String>::default();
    let mut total_revenue = Decimal::ZERO;

    for record in &records {
        let overflow = || DataError::overflow(record.source_row);
        let day = per_day.entry(record.date).or_default();

        *day = day.checked_add(record.line_total).ok_or_else(overflow)?;
        total_revenue = total_revenue.checked_add(record.line_total).ok_or_else(overflow)?;
        per_seller.add(&record.seller, record.line_total).ok_or_else(overflow)?;
        per_product.add(&record.product, record.quantity).ok_or_else(overflow)?;
    }

    //NOTE: Ascending iteration plus a strict comparison keeps the earliest date on ties
    let (peak_day, peak_day_amount) = per_day.iter()
        .fold(None, |peak: Option<(NaiveDate, Decimal)>, (date, amount)| match peak {
            Some((_, best)) if *amount <= best => peak,
            _ => Some((*date, *amount))
        })
        .ok_or(DataError::InsufficientData)?;

    let top_product = per_product.leader()
        .map(|(product, _)| product.clone())
        .ok_or(DataError::InsufficientData)?;

    let mut per_seller: Vec<SellerTotal> = per_seller.into_entries().into_iter()
        .map(|(seller, revenue)| SellerTotal { seller, revenue })
        .collect();
    per_seller.sort_by(|left, right| right.revenue.cmp(&left.revenue));

    let per_day: Vec<DayTotal> = per_day.into_iter()
        .map(|(date, revenue)| DayTotal { date, revenue })
        .collect();

    let summary = Summary {
        total_revenue,
        top_product,
        peak_day,
        peak_day_amount
    };

    debug!("Computed {summary:?} over {} records, {} sellers and {} days", records.len(), per_seller.len(), per_day.len());

    Ok(Metrics {
        records: EnrichedRecords { headers, schema, records },
        summary,
        per_seller,
        per_day
    })
}

fn enrich(dated: DatedRow, schema: &Schema) -> Result<SaleRecord, DataError> {
    let DatedRow { date, row } = dated;

    let number = |column: Column| {
        let cell = row.cell(schema.index(column));
        cell.parse_decimal().map_err(|error| DataError::from_number(error, row.source_row, column, cell))
    };

    let quantity = number(Column::Quantity)?;
    let price = number(Column::Price)?;
    let line_total = quantity.checked_mul(price)
        .ok_or_else(|| DataError::overflow(row.source_row))?;

    Ok(SaleRecord {
        source_row: row.source_row,
        date,
        seller: row.cell(schema.seller).to_string(),
        product: row.cell(schema.product).to_string(),
        quantity,
        price,
        line_total,
        cells: row.cells
    })
}

/// Summed amounts per key, remembering the order keys first appeared in.
struct Tally<K> {
    entries: Vec<(K, Decimal)>,
    positions: HashMap<K, usize>
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new()
        }
    }
}

impl<K: Eq + Hash + Clone> Tally<K> {
    /// Adds `amount` to `key`, returning `None` on overflow.
    fn add(&mut self, key: &K, amount: Decimal) -> Option<()> {
        match self.positions.get(key).copied() {
            Some(position) => {
                let total = &mut self.entries[position].1;
                *total = total.checked_add(amount)?;
            }
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key.clone(), amount));
            }
        }

        Some(())
    }

    /// The key with the largest total, first appearance winning ties.
    fn leader(&self) -> Option<&(K, Decimal)> {
        self.entries.iter().fold(None, |best: Option<&(K, Decimal)>, entry| match best {
            Some(current) if entry.1 <= current.1 => best,
            _ => Some(entry)
        })
    }

    fn into_entries(self) -> Vec<(K, Decimal)> {
        self.entries
    }
}
