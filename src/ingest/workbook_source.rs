use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::models::RawTable;
use crate::types::{parse_date_text, Cell};

pub fn read(path: &Path) -> Result<RawTable, calamine::Error> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0)
        .ok_or(calamine::Error::Msg("workbook has no worksheets"))??;

    //NOTE: Ranges are trimmed to the used area, so the header may not sit on the first sheet row
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let mut rows = range.rows();

    let Some(header_row) = rows.next() else {
        return Ok(RawTable::default());
    };

    let headers = header_row.iter().map(|data| Cell::from(data).to_string()).collect();
    let mut table = RawTable::new(headers);

    for (index, row) in rows.enumerate() {
        table.push_row(first_row + index + 2, row.iter().map(Cell::from).collect());
    }

    Ok(table)
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(text) => Cell::from_text(text),
            Data::Float(value) => Cell::Number(*value),
            Data::Int(value) => Cell::Number(*value as f64),
            Data::Bool(value) => Cell::Bool(*value),
            Data::DateTime(datetime) => datetime.as_datetime()
                .map(|datetime| Cell::Date(datetime.date()))
                .unwrap_or_else(|| Cell::Number(datetime.as_f64())),
            Data::DateTimeIso(text) => parse_date_text(text)
                .map(Cell::Date)
                .unwrap_or_else(|| Cell::Text(text.clone())),
            Data::DurationIso(text) => Cell::Text(text.clone()),
            Data::Error(error) => Cell::Text(format!("#{error:?}"))
        }
    }
}
