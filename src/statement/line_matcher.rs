//! Holdings line matching
//!
//! One holding per line, shaped `<name> $<amount> <percent>%`. The amount
//! and percent groups accept more than the numeric grammar, so near-misses
//! like `$1,2.5` or `12.5%` come back as malformed numbers.

use super::{
    numbers::{parse_currency, parse_percent},
    HoldingCandidate,
};
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_HOLDING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<name>[^$]+?)",
        r"\s+\$(?P<amount>\d[\d,]*(?:\.\d+)?)",
        r"\s+(?P<percent>\d+(?:\.\d+)?)%\s*$",
    ))
    .unwrap()
});

/// Match a single line against the holding shape.
///
/// `Ok(None)` for lines that do not look like a holding, `Err` when the
/// shape matches but a number does not parse.
pub fn match_holding_line(line: &str) -> Result<Option<HoldingCandidate>> {
    let Some(caps) = RE_HOLDING_LINE.captures(line) else {
        return Ok(None);
    };

    let name = caps["name"].trim();
    if name.is_empty() {
        return Ok(None);
    }

    let raw_value = parse_currency(&caps["amount"])?;
    let percent = parse_percent(&caps["percent"])?;

    Ok(Some(HoldingCandidate {
        name: name.to_string(),
        raw_value,
        percent,
    }))
}
