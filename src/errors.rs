use std::error::Error as StdError;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report::WriteFailure;
use crate::types::{Column, DataError, DateError, DateRange};

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Presentation text shared by empty ranges and failed writes.
pub const NO_SALES_IN_RANGE: &str = "No sales in the selected range. Check the dates or widen the period.";

/// Every way a report run can fail. The pipeline stops at the first one.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Missing required columns: {}", join_columns(.missing))]
    Schema {
        missing: Vec<Column>
    },
    #[error(transparent)]
    Date(#[from] DateError),
    #[error("No sales in the selected range ({range})")]
    EmptyRange {
        range: DateRange
    },
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("Report could not be produced at [{}]: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: WriteFailure
    },
    #[error("Could not read [{}]: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: BoxError
    },
    #[error("Report job stopped before finishing: {reason}")]
    Interrupted {
        reason: String
    }
}

impl ReportError {
    pub fn missing_columns(missing: Vec<Column>) -> Self {
        Self::Schema { missing }
    }

    pub fn empty_range(range: DateRange) -> Self {
        Self::EmptyRange { range }
    }

    pub fn write(path: &Path, source: impl Into<WriteFailure>) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source: source.into()
        }
    }

    pub fn io(path: &Path, source: impl Into<BoxError>) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source: source.into()
        }
    }

    pub fn not_found(path: &Path) -> Self {
        Self::io(path, io::Error::new(io::ErrorKind::NotFound, "file does not exist"))
    }

    pub fn unsupported_format(path: &Path) -> Self {
        Self::io(path, io::Error::new(io::ErrorKind::InvalidInput, "unsupported file format, expected .xlsx, .xls, .ods or .csv"))
    }

    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted { reason: reason.into() }
    }

    /// True when the caller can recover by widening the date range.
    pub fn is_empty_range(&self) -> bool {
        matches!(self, Self::EmptyRange { .. })
    }

    /// Message for a presentation layer.
    ///
    /// Write failures deliberately share the empty-range wording, which existing
    /// front ends display verbatim. Use `Display` or `source()` for the real cause.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyRange { .. } | Self::Write { .. } => NO_SALES_IN_RANGE.to_string(),
            other => other.to_string()
        }
    }
}

fn join_columns(columns: &[Column]) -> String {
    columns.iter().map(|column| column.name()).collect::<Vec<_>>().join(", ")
}
