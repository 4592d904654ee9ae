use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::errors::DateError;

/// Format accepted for range bounds supplied by the caller.
pub const RANGE_FORMAT: &str = "%Y-%m-%d";

// Slash dates are month-first; day-first only applies when the first part cannot be a month.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f"
];

// Serial 2958465 is 9999-12-31 in the 1900 date system.
const MAX_SERIAL: f64 = 2_958_465.0;

/// Parses a textual date in any of the accepted layouts.
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    DATE_FORMATS.iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DATETIME_FORMATS.iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// Converts a spreadsheet serial number (1900 system) to a date.
pub fn from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=MAX_SERIAL).contains(&serial) {
        return None;
    }

    //NOTE: Day zero is 1899-12-30 so that serial 61 lands on 1900-03-01 despite the phantom 1900-02-29
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial.floor() as u64))
}

/// An inclusive window of calendar dates.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses both bounds as `YYYY-MM-DD`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidRange` naming the first bound that fails to parse.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateError> {
        Ok(Self::new(parse_bound(start)?, parse_bound(end)?))
    }

    /// First day of the month containing `today`, through `today`.
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self::new(today.with_day(1).unwrap_or(today), today)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Display for DateRange {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} to {}", self.start.format(RANGE_FORMAT), self.end.format(RANGE_FORMAT))
    }
}

fn parse_bound(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value.trim(), RANGE_FORMAT)
        .map_err(|_| DateError::invalid_range(value))
}
