use super::{from_serial, parse_date_text, Cell, Column, DateError, DateRange, NumberError};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid test date"))
}

#[test]
fn test_date_text_parses_supported_layouts() -> Result<()> {
    let expected = date(2024, 3, 15)?;
    let test_cases = vec![
        "2024-03-15",
        " 2024-03-15 ",
        "2024/03/15",
        "03/15/2024",
        "15/03/2024",
        "2024-03-15 10:30:00",
        "2024-03-15T10:30:00",
        "2024-03-15T10:30:00.250",
    ];

    for input in test_cases {
        assert_eq!(parse_date_text(input), Some(expected), "failed on {input:?}");
    }

    Ok(())
}

#[test]
fn test_slash_dates_are_month_first() -> Result<()> {
    assert_eq!(parse_date_text("01/02/2024"), Some(date(2024, 1, 2)?));
    assert_eq!(parse_date_text("12/11/2024"), Some(date(2024, 12, 11)?));
    assert_eq!(parse_date_text("13/11/2024"), Some(date(2024, 11, 13)?));

    Ok(())
}

#[test]
fn test_date_text_rejects_garbage() {
    assert!(parse_date_text("").is_none());
    assert!(parse_date_text("yesterday").is_none());
    assert!(parse_date_text("2024-13-01").is_none());
    assert!(parse_date_text("2024-02-30").is_none());
    assert!(parse_date_text("15-03-2024").is_none());
    assert!(parse_date_text("31/31/2024").is_none());
}

#[test]
fn test_serial_numbers_map_to_calendar_dates() -> Result<()> {
    assert_eq!(from_serial(45292.0), Some(date(2024, 1, 1)?));
    assert_eq!(from_serial(45292.75), Some(date(2024, 1, 1)?));
    assert_eq!(from_serial(61.0), Some(date(1900, 3, 1)?));
    assert!(from_serial(0.0).is_none());
    assert!(from_serial(-3.0).is_none());
    assert!(from_serial(f64::NAN).is_none());

    Ok(())
}

#[test]
fn test_range_parses_both_bounds() -> Result<()> {
    let range = DateRange::parse("2024-01-01", "2024-01-31")?;

    assert_eq!(range.start, date(2024, 1, 1)?);
    assert_eq!(range.end, date(2024, 1, 31)?);
    assert_eq!(range.to_string(), "2024-01-01 to 2024-01-31");

    Ok(())
}

#[test]
fn test_range_rejects_malformed_bounds() {
    let result = DateRange::parse("2024-01-01", "31/01/2024");
    assert!(matches!(result, Err(DateError::InvalidRange { ref value }) if value == "31/01/2024"));

    let result = DateRange::parse("not a date", "2024-01-31");
    assert!(matches!(result, Err(DateError::InvalidRange { .. })));
}

#[test]
fn test_range_is_inclusive_on_both_ends() -> Result<()> {
    let range = DateRange::parse("2024-01-10", "2024-01-20")?;

    assert!(range.contains(date(2024, 1, 10)?));
    assert!(range.contains(date(2024, 1, 20)?));
    assert!(!range.contains(date(2024, 1, 9)?));
    assert!(!range.contains(date(2024, 1, 21)?));

    Ok(())
}

#[test]
fn test_month_to_date_starts_on_the_first() -> Result<()> {
    let range = DateRange::month_to_date(date(2026, 10, 18)?);

    assert_eq!(range.start, date(2026, 10, 1)?);
    assert_eq!(range.end, date(2026, 10, 18)?);

    Ok(())
}

#[test]
fn test_cells_coerce_to_decimals() -> Result<()> {
    assert_eq!(Cell::Number(2.0).to_decimal(), Some(Decimal::from(2)));
    assert_eq!(Cell::Number(10.1).to_decimal(), Some(Decimal::from_str("10.1")?));
    assert_eq!(Cell::from(" 12.50 ").to_decimal(), Some(Decimal::from_str("12.50")?));
    assert_eq!(Cell::from("1e3").to_decimal(), Some(Decimal::from(1000)));
    assert!(Cell::from("abc").to_decimal().is_none());
    assert!(Cell::Empty.to_decimal().is_none());
    assert!(Cell::Bool(true).to_decimal().is_none());

    Ok(())
}

#[test]
fn test_decimal_coercion_separates_out_of_range_from_non_numeric() {
    assert_eq!(Cell::Number(1e30).parse_decimal(), Err(NumberError::OutOfRange));
    assert_eq!(Cell::from("1e30").parse_decimal(), Err(NumberError::OutOfRange));
    assert_eq!(Cell::from("1000000000000000000000000000000").parse_decimal(), Err(NumberError::OutOfRange));
    assert_eq!(Cell::Number(f64::INFINITY).parse_decimal(), Err(NumberError::NotNumeric));
    assert_eq!(Cell::from("NaN").parse_decimal(), Err(NumberError::NotNumeric));
    assert_eq!(Cell::from("abc").parse_decimal(), Err(NumberError::NotNumeric));
    assert_eq!(Cell::Empty.parse_decimal(), Err(NumberError::NotNumeric));
}

#[test]
fn test_cells_display_like_a_spreadsheet() -> Result<()> {
    assert_eq!(Cell::Number(70.0).to_string(), "70");
    assert_eq!(Cell::Number(12.5).to_string(), "12.5");
    assert_eq!(Cell::Bool(false).to_string(), "FALSE");
    assert_eq!(Cell::Date(date(2024, 1, 2)?).to_string(), "2024-01-02");
    assert_eq!(Cell::Empty.to_string(), "");
    assert!(Cell::from_text("   ").is_empty());

    Ok(())
}

#[test]
fn test_columns_match_canonical_and_legacy_headers() {
    assert!(Column::Price.matches("price"));
    assert!(Column::Price.matches(" Precio "));
    assert!(Column::Seller.matches("VENDEDOR"));
    assert!(!Column::Seller.matches("vendor"));
    assert_eq!(Column::Quantity.to_string(), "quantity");
}
