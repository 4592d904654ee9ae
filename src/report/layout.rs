use crate::models::{DayTotal, EnrichedRecords, SellerTotal, Summary};
use crate::types::Cell;

/// A sheet ready to render: a header row over typed body rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>
}

impl SheetLayout {
    /// Width of each column in characters: the longest displayed value,
    /// header included, plus `padding`.
    pub fn column_widths(&self, padding: usize) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter()
            .map(|header| header.chars().count())
            .collect();

        for row in &self.rows {
            for (column, cell) in row.iter().enumerate() {
                let length = cell.to_string().chars().count();

                match widths.get_mut(column) {
                    Some(width) => *width = (*width).max(length),
                    None => widths.push(length)
                }
            }
        }

        widths.into_iter().map(|width| width + padding).collect()
    }
}

/// Every enriched record with typed date, quantity and price cells and the
/// derived column appended.
pub fn detail_sheet(name: &str, derived_column: &str, records: &EnrichedRecords) -> SheetLayout {
    let schema = &records.schema;
    let mut headers = records.headers.clone();
    headers.push(derived_column.to_string());

    let rows = records.records.iter()
        .map(|record| {
            let mut cells = record.cells.clone();
            cells.resize(records.headers.len(), Cell::Empty);

            cells[schema.date] = Cell::Date(record.date);
            cells[schema.quantity] = Cell::from(record.quantity);
            cells[schema.price] = Cell::from(record.price);
            cells.push(Cell::from(record.line_total));
            cells
        })
        .collect();

    SheetLayout { name: name.to_string(), headers, rows }
}

pub fn summary_sheet(name: &str, summary: &Summary) -> SheetLayout {
    let rows = summary.metrics().into_iter()
        .map(|(label, value)| vec![Cell::from(label), value])
        .collect();

    SheetLayout {
        name: name.to_string(),
        headers: vec!["Metric".to_string(), "Value".to_string()],
        rows
    }
}

pub fn seller_sheet(name: &str, derived_column: &str, per_seller: &[SellerTotal]) -> SheetLayout {
    let rows = per_seller.iter()
        .map(|total| vec![Cell::Text(total.seller.clone()), Cell::from(total.revenue)])
        .collect();

    SheetLayout {
        name: name.to_string(),
        headers: vec!["seller".to_string(), derived_column.to_string()],
        rows
    }
}

pub fn daily_sheet(name: &str, derived_column: &str, per_day: &[DayTotal]) -> SheetLayout {
    let rows = per_day.iter()
        .map(|total| vec![Cell::Date(total.date), Cell::from(total.revenue)])
        .collect();

    SheetLayout {
        name: name.to_string(),
        headers: vec!["date".to_string(), derived_column.to_string()],
        rows
    }
}
