//! Dashboard view model
//!
//! Shapes an extraction into what the dashboard renders: the headline value,
//! a holdings table, an allocation pie (by percent) and a top-holdings bar
//! chart (by value). Chart drawing itself lives in the frontend.

use crate::statement::{Advisory, HoldingRecord, StatementExtraction};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Bars shown in the top-holdings chart unless the caller asks otherwise
pub const DEFAULT_BAR_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub name: String,
    pub value: Decimal,
    /// e.g. "$320,000.00"
    pub formatted_value: String,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub name: String,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueBar {
    pub name: String,
    pub value: Decimal,
    /// Axis label, e.g. "$320k"
    pub tick: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// "$1234567.89" or "Not found"
    pub headline: String,
    pub portfolio_value: Option<Decimal>,
    pub holdings_found: bool,
    pub holdings: Vec<HoldingRow>,
    pub allocation: Vec<AllocationSlice>,
    pub top_holdings: Vec<ValueBar>,
    pub advisories: Vec<Advisory>,
}

impl DashboardView {
    pub fn from_extraction(extraction: &StatementExtraction, bar_limit: usize) -> Self {
        let holdings = extraction.holdings.iter().map(holding_row).collect();

        let allocation = extraction
            .holdings
            .iter()
            .map(|h| AllocationSlice {
                name: h.name().to_string(),
                percent: h.percent(),
            })
            .collect();

        let mut by_value: Vec<&HoldingRecord> = extraction.holdings.iter().collect();
        by_value.sort_by(|a, b| b.raw_value().cmp(&a.raw_value()));
        let top_holdings = by_value
            .into_iter()
            .take(bar_limit)
            .map(|h| ValueBar {
                name: h.name().to_string(),
                value: h.raw_value(),
                tick: format_thousands_tick(h.raw_value()),
            })
            .collect();

        Self {
            headline: extraction.portfolio_value.to_string(),
            portfolio_value: extraction.portfolio_value.amount(),
            holdings_found: extraction.holdings_found(),
            holdings,
            allocation,
            top_holdings,
            advisories: extraction.advisories.clone(),
        }
    }
}

fn holding_row(record: &HoldingRecord) -> HoldingRow {
    HoldingRow {
        name: record.name().to_string(),
        value: record.raw_value(),
        formatted_value: format_currency(record.raw_value()),
        percent: record.percent(),
    }
}

/// Format as US dollars with thousands separators (320000 -> "$320,000.00")
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(integer), fraction)
}

/// Compact axis label in thousands (320000 -> "$320k")
pub fn format_thousands_tick(value: Decimal) -> String {
    let thousands = (value / Decimal::ONE_THOUSAND)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("${}k", thousands.normalize())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::statement::extract_statement;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(320000)), "$320,000.00");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(999.5)), "$999.50");
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(-1500)), "-$1,500.00");
    }

    #[test]
    fn test_format_thousands_tick() {
        assert_eq!(format_thousands_tick(dec!(320000)), "$320k");
        assert_eq!(format_thousands_tick(dec!(1500)), "$2k");
        assert_eq!(format_thousands_tick(dec!(400)), "$0k");
    }

    #[test]
    fn test_view_from_extraction() {
        let content = "\
Your Net Portfolio Value: $1,234,567.89
TSLA $120,000.00 10%
AAPL $320,000.00 25%
MSFT $240,000.00 19%";
        let extraction = extract_statement(content, &ExtractionConfig::default());
        let view = DashboardView::from_extraction(&extraction, 2);

        assert_eq!(view.headline, "$1234567.89");
        assert!(view.holdings_found);
        assert_eq!(view.holdings.len(), 3);
        assert_eq!(view.holdings[0].formatted_value, "$320,000.00");
        assert_eq!(view.allocation[2], AllocationSlice { name: "TSLA".to_string(), percent: 10 });
        assert_eq!(view.top_holdings.len(), 2);
        assert_eq!(view.top_holdings[1].tick, "$240k");
    }

    #[test]
    fn test_view_without_holdings() {
        let extraction = extract_statement("nothing useful", &ExtractionConfig::default());
        let view = DashboardView::from_extraction(&extraction, DEFAULT_BAR_LIMIT);

        assert_eq!(view.headline, "Not found");
        assert_eq!(view.portfolio_value, None);
        assert!(!view.holdings_found);
        assert!(view.top_holdings.is_empty());
        assert!(view.advisories.contains(&Advisory::NoHoldingsFound));
    }
}
