use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, FormatAlign, Workbook, Worksheet, XlsxError};
use tempfile::NamedTempFile;
use tracing::{debug, error};

use crate::config::ReportConfig;
use crate::errors::ReportError;
use crate::models::{DayTotal, EnrichedRecords, SellerTotal, Summary};
use crate::report::errors::WriteFailure;
use crate::report::layout::{daily_sheet, detail_sheet, seller_sheet, summary_sheet, SheetLayout};
use crate::types::Cell;

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Renders the four report sheets into a workbook on disk.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    config: ReportConfig
}

impl ReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Lays out the detail, summary, per-seller and per-day sheets, in that order.
    pub fn layout(&self, records: &EnrichedRecords, summary: &Summary, per_seller: &[SellerTotal], per_day: &[DayTotal]) -> [SheetLayout; 4] {
        let config = &self.config;

        [
            detail_sheet(&config.detail_sheet, &config.derived_column, records),
            summary_sheet(&config.summary_sheet, summary),
            seller_sheet(&config.seller_sheet, &config.derived_column, per_seller),
            daily_sheet(&config.daily_sheet, &config.derived_column, per_day)
        ]
    }

    /// Writes the report to `path`.
    ///
    /// The workbook is staged in a temporary file next to `path` and moved into
    /// place once complete, so a failed write leaves nothing behind.
    ///
    /// # Errors
    /// Any failure, whether building the workbook or touching the disk, is
    /// reported as `ReportError::Write`.
    pub fn write(&self, path: &Path, records: &EnrichedRecords, summary: &Summary, per_seller: &[SellerTotal], per_day: &[DayTotal]) -> Result<(), ReportError> {
        let sheets = self.layout(records, summary, per_seller, per_day);

        let result = self.render(&sheets)
            .map_err(WriteFailure::from)
            .and_then(|mut workbook| persist(&mut workbook, path));

        if let Err(failure) = result {
            error!("Report could not be written to [{}]: {failure}", path.display());
            return Err(ReportError::write(path, failure));
        }

        debug!("Wrote {} sheets to [{}]", sheets.len(), path.display());

        Ok(())
    }

    fn render(&self, sheets: &[SheetLayout]) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold().set_align(FormatAlign::Center);
        let date_format = Format::new().set_num_format(DATE_FORMAT);

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            for (column, header) in sheet.headers.iter().enumerate() {
                worksheet.write_string_with_format(0, column_index(column)?, header, &header_format)?;
            }

            for (index, row) in sheet.rows.iter().enumerate() {
                let row_index = row_index(index + 1)?;

                for (column, cell) in row.iter().enumerate() {
                    write_cell(worksheet, row_index, column_index(column)?, cell, &date_format)?;
                }
            }

            for (column, width) in sheet.column_widths(self.config.column_padding).into_iter().enumerate() {
                worksheet.set_column_width(column_index(column)?, width as f64)?;
            }

            worksheet.set_freeze_panes(1, 0)?;
        }

        Ok(workbook)
    }
}

fn write_cell(worksheet: &mut Worksheet, row: u32, column: u16, cell: &Cell, date_format: &Format) -> Result<(), XlsxError> {
    match cell {
        Cell::Empty => {}
        Cell::Text(text) => {
            worksheet.write_string(row, column, text)?;
        }
        Cell::Number(value) => {
            worksheet.write_number(row, column, *value)?;
        }
        Cell::Bool(value) => {
            worksheet.write_boolean(row, column, *value)?;
        }
        Cell::Date(date) => {
            worksheet.write_datetime_with_format(row, column, &excel_date(*date)?, date_format)?;
        }
    }

    Ok(())
}

fn excel_date(date: NaiveDate) -> Result<ExcelDateTime, XlsxError> {
    let year = u16::try_from(date.year()).map_err(|_| XlsxError::DateTimeRangeError(date.to_string()))?;

    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8)
}

fn row_index(index: usize) -> Result<u32, XlsxError> {
    u32::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn column_index(index: usize) -> Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn persist(workbook: &mut Workbook, path: &Path) -> Result<(), WriteFailure> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new(".")
    };

    let mut staged = NamedTempFile::new_in(directory)?;
    workbook.save_to_writer(staged.as_file_mut())?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|error| error.error)?;

    Ok(())
}
