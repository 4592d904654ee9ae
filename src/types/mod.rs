mod cell;
mod column;
mod dates;
mod errors;
#[cfg(test)]
mod tests;

pub use cell::Cell;
pub use column::Column;
pub use dates::{from_serial, parse_date_text, DateRange, RANGE_FORMAT};
pub use errors::{DataError, DateError, NumberError};

/// Spreadsheet row number as seen by the user (the header is row 1).
pub type SourceRow = usize;
