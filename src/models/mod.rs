mod record;
mod summary;
mod table;

pub use record::{EnrichedRecords, SaleRecord};
pub use summary::{DayTotal, Metrics, SellerTotal, Summary};
pub use table::{DatedRow, FilteredRecords, RawRow, RawTable, Schema, ValidatedTable};
