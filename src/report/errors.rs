use std::io;

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteFailure {
    #[error("Workbook error: {0}")]
    Workbook(#[from] XlsxError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error)
}
