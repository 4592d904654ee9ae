mod csv_source;
mod workbook_source;

use std::path::Path;

use tracing::debug;

use crate::errors::ReportError;
use crate::models::RawTable;

/// Input layouts the loader understands.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SourceFormat {
    Csv,
    Workbook
}

impl SourceFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        match extension.as_str() {
            "csv" => Some(SourceFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SourceFormat::Workbook),
            _ => None
        }
    }
}

/// Reads the source artifact into a raw table.
///
/// Workbooks are read from their first worksheet. In both layouts the first row
/// holds the headers.
///
/// # Errors
/// Returns `ReportError::Io` if the extension is unsupported or the file cannot
/// be opened or decoded.
pub fn load(path: &Path) -> Result<RawTable, ReportError> {
    let format = SourceFormat::from_path(path)
        .ok_or_else(|| ReportError::unsupported_format(path))?;

    let table = match format {
        SourceFormat::Csv => csv_source::read(path).map_err(|error| ReportError::io(path, error))?,
        SourceFormat::Workbook => workbook_source::read(path).map_err(|error| ReportError::io(path, error))?
    };

    debug!("Loaded {} rows and {} columns from [{}]", table.len(), table.headers.len(), path.display());

    Ok(table)
}
