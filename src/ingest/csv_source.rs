use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::models::RawTable;
use crate::types::Cell;

pub fn read(path: &Path) -> Result<RawTable, csv::Error> {
    let content = fs::read(path)?;
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_slice());

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut table = RawTable::new(headers);
    let mut lines = LineCounter::default();

    for result in reader.records() {
        let record = result?;
        let offset = record.position()
            .map(|position| position.byte() as usize)
            .unwrap_or(content.len());
        let source_row = lines.record_line(&content, offset);

        table.push_row(source_row, record.iter().map(Cell::from_text).collect());
    }

    Ok(table)
}

/// Physical line numbers for CSV records.
///
/// The reader's own line counter does not advance over blank lines, and a
/// record's byte position points at the end of the previous record, so any
/// blank lines in between are counted here before the record starts.
struct LineCounter {
    offset: usize,
    line: usize,
}

impl Default for LineCounter {
    fn default() -> Self {
        Self { offset: 0, line: 1 }
    }
}

impl LineCounter {
    fn record_line(&mut self, content: &[u8], offset: usize) -> usize {
        let mut end = offset.min(content.len()).max(self.offset);
        self.line += count_newlines(&content[self.offset..end]);

        while let Some(&byte) = content.get(end) {
            match byte {
                b'\n' => self.line += 1,
                b'\r' => {}
                _ => break
            }
            end += 1;
        }

        self.offset = end;
        self.line
    }
}

fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&byte| byte == b'\n').count()
}
