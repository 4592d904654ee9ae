use chrono::NaiveDate;

use crate::types::{Cell, Column, SourceRow};

static EMPTY: Cell = Cell::Empty;

/// One data row from the source sheet, padded to the header width.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub source_row: SourceRow,
    pub cells: Vec<Cell>
}

impl RawRow {
    pub fn cell(&self, index: usize) -> &Cell {
        self.cells.get(index).unwrap_or(&EMPTY)
    }
}

/// The source sheet as loaded: named columns over rows in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new()
        }
    }

    /// Appends a row, skipping rows with no values at all.
    pub fn push_row(&mut self, source_row: SourceRow, mut cells: Vec<Cell>) {
        if cells.iter().all(Cell::is_empty) {
            return;
        }

        cells.resize(self.headers.len(), Cell::Empty);
        self.rows.push(RawRow { source_row, cells });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Column positions of the required fields within a table.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Schema {
    pub date: usize,
    pub seller: usize,
    pub product: usize,
    pub quantity: usize,
    pub price: usize
}

impl Schema {
    pub fn index(&self, column: Column) -> usize {
        match column {
            Column::Date => self.date,
            Column::Seller => self.seller,
            Column::Product => self.product,
            Column::Quantity => self.quantity,
            Column::Price => self.price
        }
    }
}

/// A table known to carry every required column.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTable {
    pub table: RawTable,
    pub schema: Schema
}

/// A row whose date has been parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedRow {
    pub date: NaiveDate,
    pub row: RawRow
}

/// Rows that survived the date filter, still in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredRecords {
    pub headers: Vec<String>,
    pub schema: Schema,
    pub rows: Vec<DatedRow>
}

impl FilteredRecords {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
