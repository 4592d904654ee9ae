mod errors;
mod layout;
#[cfg(test)]
mod tests;
mod writer;

pub use errors::WriteFailure;
pub use layout::{daily_sheet, detail_sheet, seller_sheet, summary_sheet, SheetLayout};
pub use writer::ReportWriter;
