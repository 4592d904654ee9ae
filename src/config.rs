use std::path::PathBuf;

use thiserror::Error;

use crate::engine::ReportRequest;

/// Output path used when the caller does not name one.
pub const DEFAULT_OUTPUT: &str = "reporte.xlsx";
/// Environment variable holding the log level for the binary.
pub const LOG_LEVEL_VAR: &str = "SALES_REPORT_LOG";
pub const USAGE: &str = "Usage: sales-report <input.xlsx|input.csv> [output.xlsx] [start-date end-date]";

/// Presentation settings for the generated workbook.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReportConfig {
    pub detail_sheet: String,
    pub summary_sheet: String,
    pub seller_sheet: String,
    pub daily_sheet: String,
    /// Header of the `quantity * price` column.
    pub derived_column: String,
    /// Characters added to the widest value of each column.
    pub column_padding: usize
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            detail_sheet: "Detailed Sales".to_string(),
            summary_sheet: "Summary".to_string(),
            seller_sheet: "By Seller".to_string(),
            daily_sheet: "Sales by Day".to_string(),
            derived_column: "total".to_string(),
            column_padding: 2
        }
    }
}

impl ReportConfig {
    pub fn with_sheet_names(mut self, detail: &str, summary: &str, seller: &str, daily: &str) -> Self {
        self.detail_sheet = detail.to_string();
        self.summary_sheet = summary.to_string();
        self.seller_sheet = seller.to_string();
        self.daily_sheet = daily.to_string();
        self
    }

    pub fn with_derived_column(mut self, name: &str) -> Self {
        self.derived_column = name.to_string();
        self
    }

    pub fn with_column_padding(mut self, padding: usize) -> Self {
        self.column_padding = padding;
        self
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum UsageError {
    #[error("An input file is required")]
    MissingInput,
    #[error("Both a start date and an end date are required to filter by range")]
    IncompleteRange,
    #[error("Too many arguments")]
    TooManyArguments
}

/// A parsed command line: `<input> [output] [start end]`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Invocation {
    pub input: PathBuf,
    pub output: PathBuf,
    pub range: Option<(String, String)>
}

impl Invocation {
    /// Parses the arguments that follow the program name.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, UsageError> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        let (input, output, range) = match args.as_slice() {
            [] => return Err(UsageError::MissingInput),
            [input] => (*input, DEFAULT_OUTPUT, None),
            [input, output] => (*input, *output, None),
            [_, _, _] => return Err(UsageError::IncompleteRange),
            [input, output, start, end] => (*input, *output, Some((start.to_string(), end.to_string()))),
            _ => return Err(UsageError::TooManyArguments)
        };

        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            range
        })
    }

    pub fn into_request(self) -> ReportRequest {
        let request = ReportRequest::new(self.input, self.output);

        match self.range {
            Some((start, end)) => request.with_range(start, end),
            None => request
        }
    }
}
