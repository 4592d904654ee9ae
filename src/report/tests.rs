use super::{daily_sheet, seller_sheet, ReportWriter, SheetLayout};

use anyhow::{anyhow, Result};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tempfile::tempdir;
use zip::ZipArchive;

use crate::config::ReportConfig;
use crate::ingest::load;
use crate::models::{DayTotal, Metrics, RawTable, SellerTotal};
use crate::pipeline::{compute, filter, validate};
use crate::types::Cell;

fn create_metrics() -> Result<Metrics> {
    let mut table = RawTable::new(
        ["date", "seller", "product", "quantity", "price", "notes"].iter().map(|header| header.to_string()).collect()
    );
    table.push_row(2, vec![Cell::from("2024-01-01"), Cell::from("Ana"), Cell::from("Widget"), Cell::Number(2.0), Cell::Number(10.5), Cell::from("first")]);
    table.push_row(3, vec![Cell::from("2024-01-02"), Cell::from("Luis"), Cell::from("Gadget"), Cell::from("1"), Cell::from("50"), Cell::Empty]);
    table.push_row(4, vec![Cell::from("2024-01-02"), Cell::from("Ana"), Cell::from("Widget"), Cell::Number(3.0), Cell::Number(10.5), Cell::from("last")]);

    Ok(compute(filter(validate(table)?, None, None)?)?)
}

fn read_part(path: &Path, part: &str) -> Result<String> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let mut content = String::new();
    archive.by_name(part)?.read_to_string(&mut content)?;

    Ok(content)
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid test date"))
}

#[test]
fn test_column_widths_use_longest_value_plus_padding() {
    let sheet = SheetLayout {
        name: "Sheet".to_string(),
        headers: vec!["seller".to_string(), "total".to_string()],
        rows: vec![
            vec![Cell::from("Bartholomew"), Cell::Number(12.5)],
            vec![Cell::from("Al"), Cell::Number(1234567.0)],
        ]
    };

    assert_eq!(sheet.column_widths(2), vec![13, 9]);
    assert_eq!(sheet.column_widths(0), vec![11, 7]);
}

#[test]
fn test_column_widths_cover_rows_wider_than_headers() {
    let sheet = SheetLayout {
        name: "Sheet".to_string(),
        headers: vec!["a".to_string()],
        rows: vec![vec![Cell::from("x"), Cell::from("wide")]]
    };

    assert_eq!(sheet.column_widths(2), vec![3, 6]);
}

#[test]
fn test_layout_builds_four_sheets_in_order() -> Result<()> {
    let metrics = create_metrics()?;
    let writer = ReportWriter::new(ReportConfig::default());

    let sheets = writer.layout(&metrics.records, &metrics.summary, &metrics.per_seller, &metrics.per_day);
    let names: Vec<&str> = sheets.iter().map(|sheet| sheet.name.as_str()).collect();

    assert_eq!(names, vec!["Detailed Sales", "Summary", "By Seller", "Sales by Day"]);
    assert_eq!(sheets[0].headers, vec!["date", "seller", "product", "quantity", "price", "notes", "total"]);
    assert_eq!(sheets[0].rows[0], vec![
        Cell::Date(date(2024, 1, 1)?),
        Cell::from("Ana"),
        Cell::from("Widget"),
        Cell::Number(2.0),
        Cell::Number(10.5),
        Cell::from("first"),
        Cell::Number(21.0),
    ]);
    assert_eq!(sheets[1].headers, vec!["Metric", "Value"]);
    assert_eq!(sheets[1].rows.len(), 4);

    Ok(())
}

#[test]
fn test_aggregate_sheets_follow_aggregate_order() -> Result<()> {
    let per_seller = vec![
        SellerTotal { seller: "Luis".to_string(), revenue: Decimal::from(80) },
        SellerTotal { seller: "Ana".to_string(), revenue: Decimal::from(30) },
    ];
    let per_day = vec![DayTotal { date: date(2024, 1, 1)?, revenue: Decimal::from_str("20.5")? }];

    let sellers = seller_sheet("By Seller", "total", &per_seller);
    let days = daily_sheet("Sales by Day", "total", &per_day);

    assert_eq!(sellers.rows[0], vec![Cell::from("Luis"), Cell::Number(80.0)]);
    assert_eq!(sellers.rows[1][0], Cell::from("Ana"));
    assert_eq!(days.headers, vec!["date", "total"]);
    assert_eq!(days.rows[0], vec![Cell::Date(date(2024, 1, 1)?), Cell::Number(20.5)]);

    Ok(())
}

#[test]
fn test_written_workbook_has_four_named_sheets() -> Result<()> {
    let metrics = create_metrics()?;
    let directory = tempdir()?;
    let path = directory.path().join("report.xlsx");

    ReportWriter::default().write(&path, &metrics.records, &metrics.summary, &metrics.per_seller, &metrics.per_day)?;

    let mut workbook = open_workbook_auto(&path)?;
    assert_eq!(workbook.sheet_names(), vec!["Detailed Sales", "Summary", "By Seller", "Sales by Day"]);

    let summary = workbook.worksheet_range("Summary")?;
    assert_eq!(summary.get_value((1, 0)), Some(&Data::String("Total Revenue".to_string())));
    assert_eq!(summary.get_value((1, 1)), Some(&Data::Float(102.5)));
    assert_eq!(summary.get_value((2, 1)), Some(&Data::String("Widget".to_string())));
    assert_eq!(summary.get_value((3, 1)), Some(&Data::String("2024-01-02".to_string())));

    let sellers = workbook.worksheet_range("By Seller")?;
    assert_eq!(sellers.get_value((1, 0)), Some(&Data::String("Ana".to_string())));
    assert_eq!(sellers.get_value((1, 1)), Some(&Data::Float(52.5)));

    Ok(())
}

#[test]
fn test_written_sheets_have_styled_frozen_headers_and_sized_columns() -> Result<()> {
    let metrics = create_metrics()?;
    let directory = tempdir()?;
    let path = directory.path().join("report.xlsx");
    let writer = ReportWriter::default();

    writer.write(&path, &metrics.records, &metrics.summary, &metrics.per_seller, &metrics.per_day)?;

    let styles = read_part(&path, "xl/styles.xml")?;
    assert!(styles.contains("<b/>"), "no bold font in {styles}");
    assert!(styles.contains(r#"horizontal="center""#), "no centered alignment in {styles}");

    let layouts = writer.layout(&metrics.records, &metrics.summary, &metrics.per_seller, &metrics.per_day);

    for (index, layout) in layouts.iter().enumerate() {
        let xml = read_part(&path, &format!("xl/worksheets/sheet{}.xml", index + 1))?;

        assert!(xml.contains(r#"ySplit="1""#), "{} header is not frozen", layout.name);
        assert!(xml.contains(r#"state="frozen""#), "{} header is not frozen", layout.name);
        assert!(xml.contains(r#"customWidth="1""#), "{} has default column widths", layout.name);

        for width in layout.column_widths(2) {
            let exact = format!(r#"width="{width}""#);
            let scaled = format!(r#"width="{width}."#);
            assert!(xml.contains(&exact) || xml.contains(&scaled), "{} has no column of width {width}", layout.name);
        }
    }

    Ok(())
}

#[test]
fn test_detail_sheet_round_trips_to_the_same_records() -> Result<()> {
    let metrics = create_metrics()?;
    let directory = tempdir()?;
    let path = directory.path().join("report.xlsx");

    ReportWriter::default().write(&path, &metrics.records, &metrics.summary, &metrics.per_seller, &metrics.per_day)?;

    let reread = compute(filter(validate(load(&path)?)?, None, None)?)?;

    assert_eq!(reread.records.len(), metrics.records.len());

    for (original, loaded) in metrics.records.records.iter().zip(&reread.records.records) {
        assert_eq!(loaded.date, original.date);
        assert_eq!(loaded.seller, original.seller);
        assert_eq!(loaded.product, original.product);
        assert_eq!(loaded.quantity, original.quantity);
        assert_eq!(loaded.price, original.price);
        assert_eq!(loaded.line_total, original.line_total);
        assert_eq!(loaded.cells[5], original.cells[5]);
        assert_eq!(loaded.cells[6].to_decimal(), Some(original.line_total));
    }

    Ok(())
}

#[test]
fn test_write_into_missing_directory_is_a_write_error() -> Result<()> {
    let metrics = create_metrics()?;
    let directory = tempdir()?;
    let path = directory.path().join("absent").join("report.xlsx");

    let result = ReportWriter::default().write(&path, &metrics.records, &metrics.summary, &metrics.per_seller, &metrics.per_day);

    assert!(matches!(result, Err(crate::errors::ReportError::Write { .. })));
    assert!(!path.exists());
    assert_eq!(fs::read_dir(directory.path())?.count(), 0);

    Ok(())
}
