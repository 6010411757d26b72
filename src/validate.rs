//! Checks applied to user input before anything touches the data file.

use crate::error::{Error, ErrorType};
use crate::model::{Amount, AmountError};
use crate::Result;
use chrono::NaiveDate;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates that `text` is a real calendar date written exactly as `YYYY-MM-DD`.
pub fn validate_date(text: &str) -> Result<NaiveDate> {
    if !has_shape(text, "dddd-dd-dd") {
        return Err(bad_date(text));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| bad_date(text))
}

/// Validates that `text` is a number and rounds it to two decimal places.
pub fn validate_amount(text: &str) -> Result<Amount> {
    Amount::from_str(text).map_err(|e| {
        let hint = match e {
            AmountError::NotANumber(_) => "amount must be a number, e.g. 12.50".to_string(),
            AmountError::OutOfRange(_) => {
                format!("amount must be at most {} in size", Amount::LIMIT)
            }
        };
        Error::new(ErrorType::Format, format!("Invalid amount: {e}. {hint}"))
    })
}

/// Validates that `text` is a year and month written exactly as `YYYY-MM`.
///
/// Returns the first day of that month.
pub fn validate_month(text: &str) -> Result<NaiveDate> {
    if !has_shape(text, "dddd-dd") {
        return Err(bad_month(text));
    }
    NaiveDate::parse_from_str(&format!("{text}-01"), DATE_FORMAT).map_err(|_| bad_month(text))
}

/// Validates that `text` is a whole number, for use as a 1-based position.
pub fn validate_position(text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|_| {
        Error::new(
            ErrorType::Format,
            format!("Invalid position '{text}': position must be a whole number"),
        )
    })
}

/// `chrono` accepts single-digit months and days and years of any width, so the exact layout is
/// checked first. In `pattern`, `d` stands for an ASCII digit and anything else must match as-is.
fn has_shape(text: &str, pattern: &str) -> bool {
    text.len() == pattern.len()
        && text.bytes().zip(pattern.bytes()).all(|(c, p)| match p {
            b'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}

fn bad_date(text: &str) -> Error {
    Error::new(
        ErrorType::Format,
        format!("Invalid date '{text}': date must be YYYY-MM-DD, e.g. 2025-09-20"),
    )
}

fn bad_month(text: &str) -> Error {
    Error::new(
        ErrorType::Format,
        format!("Invalid month '{text}': month must be YYYY-MM, e.g. 2025-09"),
    )
}
