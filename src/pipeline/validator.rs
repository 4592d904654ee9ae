use tracing::debug;

use crate::errors::ReportError;
use crate::models::{RawTable, Schema, ValidatedTable};
use crate::types::Column;

/// Confirms the table carries every required column.
///
/// Headers match case-insensitively, legacy Spanish names included. The first
/// matching header wins and extra columns are kept as they are.
///
/// # Errors
/// Returns `ReportError::Schema` listing every missing column.
pub fn validate(table: RawTable) -> Result<ValidatedTable, ReportError> {
    let position = |column: Column| table.headers.iter().position(|header| column.matches(header));

    let missing: Vec<Column> = Column::REQUIRED.into_iter()
        .filter(|column| position(*column).is_none())
        .collect();

    let (Some(date), Some(seller), Some(product), Some(quantity), Some(price)) = (
        position(Column::Date),
        position(Column::Seller),
        position(Column::Product),
        position(Column::Quantity),
        position(Column::Price)
    ) else {
        return Err(ReportError::missing_columns(missing));
    };

    let schema = Schema { date, seller, product, quantity, price };
    debug!("Validated schema {schema:?} over {} rows", table.len());

    Ok(ValidatedTable { table, schema })
}
