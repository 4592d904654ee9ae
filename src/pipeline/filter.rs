use tracing::debug;

use crate::errors::ReportError;
use crate::models::{DatedRow, FilteredRecords, ValidatedTable};
use crate::types::{DateError, DateRange};

/// Parses every row's date, then keeps the rows inside `[start, end]`.
///
/// The window only applies when both bounds are given, otherwise every row
/// passes through.
///
/// # Errors
/// - `ReportError::Date` if any row's date is unparseable, or a bound is not `YYYY-MM-DD`.
/// - `ReportError::EmptyRange` if a window was applied and no row falls inside it.
pub fn filter(validated: ValidatedTable, start: Option<&str>, end: Option<&str>) -> Result<FilteredRecords, ReportError> {
    let ValidatedTable { table, schema } = validated;

    let rows = table.rows.into_iter()
        .map(|row| {
            let cell = row.cell(schema.date);
            let date = cell.to_date()
                .ok_or_else(|| DateError::invalid_date(row.source_row, cell))?;

            Ok(DatedRow { date, row })
        })
        .collect::<Result<Vec<_>, DateError>>()?;

    let records = FilteredRecords {
        headers: table.headers,
        schema,
        rows
    };

    match (start, end) {
        (Some(start), Some(end)) => restrict(records, &DateRange::parse(start, end)?),
        _ => Ok(records)
    }
}

/// Keeps the rows whose date lies inside `range`, preserving order.
///
/// # Errors
/// Returns `ReportError::EmptyRange` when nothing remains.
pub fn restrict(records: FilteredRecords, range: &DateRange) -> Result<FilteredRecords, ReportError> {
    let before = records.len();
    let rows: Vec<DatedRow> = records.rows.into_iter()
        .filter(|row| range.contains(row.date))
        .collect();

    debug!("Date range {range} kept {} of {before} rows", rows.len());

    if rows.is_empty() {
        return Err(ReportError::empty_range(*range));
    }

    Ok(FilteredRecords { rows, ..records })
}
