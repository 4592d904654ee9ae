use chrono::NaiveDate;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::types::dates::{from_serial, parse_date_text};
use crate::types::errors::NumberError;

/// A single value as loaded from the source sheet or written to the report.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate)
}

impl Cell {
    /// Builds a cell from raw CSV text, treating blank fields as empty.
    pub fn from_text(value: &str) -> Self {
        if value.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Coerces the cell to an exact decimal.
    ///
    /// Spreadsheet numbers and numeric text (plain or scientific notation) succeed.
    /// Finite numbers too large for a `Decimal` are `OutOfRange`, everything else
    /// is `NotNumeric`.
    pub fn parse_decimal(&self) -> Result<Decimal, NumberError> {
        match self {
            Cell::Number(value) => Decimal::from_f64(*value).ok_or_else(|| range_error(*value)),
            Cell::Text(text) => {
                let text = text.trim();
                Decimal::from_str(text)
                    .or_else(|_| Decimal::from_scientific(text))
                    .or_else(|_| match f64::from_str(text) {
                        Ok(value) => Err(range_error(value)),
                        Err(_) => Err(NumberError::NotNumeric)
                    })
            }
            _ => Err(NumberError::NotNumeric)
        }
    }

    pub fn to_decimal(&self) -> Option<Decimal> {
        self.parse_decimal().ok()
    }

    /// Interprets the cell as a calendar date, dropping any time component.
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(date) => Some(*date),
            Cell::Text(text) => parse_date_text(text),
            Cell::Number(serial) => from_serial(*serial),
            _ => None
        }
    }
}

fn range_error(value: f64) -> NumberError {
    if value.is_finite() {
        NumberError::OutOfRange
    } else {
        NumberError::NotNumeric
    }
}

impl From<Decimal> for Cell {
    fn from(value: Decimal) -> Self {
        value.to_f64().map(Cell::Number).unwrap_or_else(|| Cell::Text(value.to_string()))
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Cell::Date(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl Display for Cell {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => write!(formatter, "{text}"),
            Cell::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(formatter, "{}", *value as i64)
            }
            Cell::Number(value) => write!(formatter, "{value}"),
            Cell::Bool(value) => write!(formatter, "{}", if *value { "TRUE" } else { "FALSE" }),
            Cell::Date(date) => write!(formatter, "{}", date.format("%Y-%m-%d"))
        }
    }
}
