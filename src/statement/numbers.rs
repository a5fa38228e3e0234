//! Currency and percentage parsing for US-formatted statements
//!
//! Inputs arrive with the `$` and `%` markers already stripped by the
//! line patterns.

use crate::error::{Result, StatementError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a US currency amount (12,345.67 -> 12345.67)
///
/// Commas are thousands separators: the leading group has one to three
/// digits and every later group exactly three. The fractional part, when
/// present, must be exactly two digits. The result always has a scale of 2.
pub fn parse_currency(s: &str) -> Result<Decimal> {
    let trimmed = s.trim();
    let (integer, fraction) = match trimmed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (trimmed, None),
    };

    if integer.is_empty() {
        return Err(StatementError::malformed(s, "no digits before the decimal point"));
    }
    if !integer.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return Err(StatementError::malformed(s, "unexpected character in amount"));
    }
    if !has_valid_grouping(integer) {
        return Err(StatementError::malformed(s, "misplaced thousands separator"));
    }

    let digits: String = integer.chars().filter(|c| *c != ',').collect();
    let cleaned = match fraction {
        Some(fraction) if fraction.len() == 2 && fraction.chars().all(|c| c.is_ascii_digit()) => {
            format!("{}.{}", digits, fraction)
        }
        Some(_) => {
            return Err(StatementError::malformed(s, "fractional part must be two digits"));
        }
        None => digits,
    };

    let mut value =
        Decimal::from_str(&cleaned).map_err(|e| StatementError::malformed(s, e.to_string()))?;
    value.rescale(2);
    Ok(value)
}

/// No commas at all, or `d{1,3}(,ddd)*`
fn has_valid_grouping(integer: &str) -> bool {
    if !integer.contains(',') {
        return true;
    }
    let mut groups = integer.split(',');
    let leading = groups.next().unwrap_or_default();
    (1..=3).contains(&leading.len()) && groups.all(|g| g.len() == 3)
}

/// Parse a whole-number percentage in `[0, 100]` (42 -> 42)
pub fn parse_percent(s: &str) -> Result<u8> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.len() > 3 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(StatementError::malformed(s, "expected one to three digits"));
    }

    let value: u16 = trimmed
        .parse()
        .map_err(|e: std::num::ParseIntError| StatementError::malformed(s, e.to_string()))?;
    if value > 100 {
        return Err(StatementError::malformed(s, "percentage above 100"));
    }
    Ok(value as u8)
}
