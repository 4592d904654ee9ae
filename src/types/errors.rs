use thiserror::Error;

use crate::types::{Cell, Column};

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Invalid date '{value}' in row [{row}]")]
    InvalidDate {
        row: usize,
        value: String
    },
    #[error("Invalid range format '{value}', use YYYY-MM-DD")]
    InvalidRange {
        value: String
    }
}

impl DateError {
    pub fn invalid_date(row: usize, cell: &Cell) -> Self {
        Self::InvalidDate { row, value: cell.to_string() }
    }

    pub fn invalid_range(value: &str) -> Self {
        Self::InvalidRange { value: value.to_string() }
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Non-numeric {column} value '{value}' in row [{row}]")]
    NonNumeric {
        row: usize,
        column: Column,
        value: String
    },
    #[error("The {column} value '{value}' in row [{row}] is outside the supported numeric range")]
    OutOfRange {
        row: usize,
        column: Column,
        value: String
    },
    #[error("Insufficient data to compute metrics")]
    InsufficientData,
    #[error("Totals exceed the supported numeric range at row [{row}]")]
    Overflow {
        row: usize
    }
}

impl DataError {
    pub fn non_numeric(row: usize, column: Column, cell: &Cell) -> Self {
        Self::NonNumeric { row, column, value: cell.to_string() }
    }

    pub fn out_of_range(row: usize, column: Column, cell: &Cell) -> Self {
        Self::OutOfRange { row, column, value: cell.to_string() }
    }

    /// Maps a failed cell coercion to the matching error for `column`.
    pub fn from_number(error: NumberError, row: usize, column: Column, cell: &Cell) -> Self {
        match error {
            NumberError::NotNumeric => Self::non_numeric(row, column, cell),
            NumberError::OutOfRange => Self::out_of_range(row, column, cell)
        }
    }

    pub fn overflow(row: usize) -> Self {
        Self::Overflow { row }
    }
}

/// Why a cell could not be read as an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("not a number")]
    NotNumeric,
    #[error("outside the supported numeric range")]
    OutOfRange
}
