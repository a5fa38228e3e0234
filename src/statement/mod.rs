//! Brokerage Statement Extraction
//!
//! Turns the decoded text of a brokerage statement into a net portfolio value
//! and a validated list of holdings. The text is expected to follow one
//! statement family's conventions:
//!
//! ```text
//! Your Net Portfolio Value: $1,234,567.89
//! Top Holdings
//! Description
//! AAPL $320,000.00 25%
//! MSFT $240,000.00 19%
//! Total $1,280,000.00 100%
//! Asset Allocation
//! ```
//!
//! Statements that deviate produce empty or partial results plus advisories,
//! never an error.

pub mod assembler;
pub mod filter;
pub mod line_matcher;
pub mod net_value;
pub mod numbers;
pub mod section;
pub mod strategies;

use crate::config::ExtractionConfig;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

pub use assembler::{assemble, AssemblyOptions};
pub use filter::filter_candidates;
pub use line_matcher::match_holding_line;
pub use net_value::extract_net_value;
pub use numbers::{parse_currency, parse_percent};
pub use section::locate_section;
pub use strategies::{
    default_strategies, HoldingsStrategy, SectionBoundedStrategy, WholeDocumentStrategy,
};

/// Net portfolio value as printed on the statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "amount", rename_all = "camelCase")]
pub enum PortfolioValue {
    Found(Decimal),
    NotFound,
}

impl PortfolioValue {
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Found(amount) => Some(*amount),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl fmt::Display for PortfolioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(amount) => write!(f, "${}", amount),
            Self::NotFound => f.write_str("Not found"),
        }
    }
}

/// A line that has the shape of a holding but has not been validated yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldingCandidate {
    pub name: String,
    pub raw_value: Decimal,
    pub percent: u8,
}

/// A holding that passed every filter
///
/// Only [`filter_candidates`] creates these, so `raw_value > 0` and
/// `percent > 0` always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    name: String,
    raw_value: Decimal,
    percent: u8,
}

impl HoldingRecord {
    pub(crate) fn from_candidate(candidate: HoldingCandidate) -> Self {
        Self {
            name: candidate.name,
            raw_value: candidate.raw_value,
            percent: candidate.percent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_value(&self) -> Decimal {
        self.raw_value
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }
}

/// Non-fatal notes collected while extracting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Advisory {
    /// No "Your Net Portfolio Value:" line, or its amount did not parse
    ValueNotFound,
    /// A line had the holding shape but its numbers did not parse
    #[serde(rename_all = "camelCase")]
    MalformedNumber {
        strategy: String,
        line: String,
        reason: String,
    },
    #[serde(rename_all = "camelCase")]
    SectionNotFound { start: String, end: String },
    /// Every strategy came back empty
    NoHoldingsFound,
}

/// Collects advisories for one extraction call
#[derive(Debug, Default)]
pub struct ParseContext {
    advisories: Vec<Advisory>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advise(&mut self, advisory: Advisory) {
        self.advisories.push(advisory);
    }

    pub fn malformed(&mut self, strategy: &str, line: &str, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("{}: dropping line '{}': {}", strategy, line.trim(), reason);
        self.advise(Advisory::MalformedNumber {
            strategy: strategy.to_string(),
            line: line.trim().to_string(),
            reason,
        });
    }

    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    pub fn into_advisories(self) -> Vec<Advisory> {
        self.advisories
    }
}

/// Result of extracting one statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementExtraction {
    pub portfolio_value: PortfolioValue,
    pub holdings: Vec<HoldingRecord>,
    /// Name of the strategy whose output was used
    pub strategy: Option<String>,
    pub advisories: Vec<Advisory>,
}

impl StatementExtraction {
    /// Distinguishes "zero holdings" from a populated result
    pub fn holdings_found(&self) -> bool {
        !self.holdings.is_empty()
    }
}

/// Runs the value extractor and the holdings strategies over a document
pub struct StatementExtractor {
    config: ExtractionConfig,
    strategies: Vec<Box<dyn HoldingsStrategy>>,
}

impl StatementExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self::with_strategies(config, default_strategies())
    }

    pub fn with_strategies(
        config: ExtractionConfig,
        strategies: Vec<Box<dyn HoldingsStrategy>>,
    ) -> Self {
        Self { config, strategies }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn extract(&self, document: &str) -> StatementExtraction {
        let mut ctx = ParseContext::new();

        let portfolio_value = extract_net_value(document, &mut ctx);

        let mut chosen = None;
        let mut holdings = Vec::new();
        for strategy in &self.strategies {
            let candidates = strategy.extract(document, &self.config, &mut ctx);
            let matched = candidates.len();
            let records = filter_candidates(candidates, &self.config.noise_words);
            log::debug!(
                "Strategy {}: {} candidates, {} valid",
                strategy.name(),
                matched,
                records.len()
            );

            if !records.is_empty() {
                chosen = Some(strategy.name().to_string());
                holdings = assemble(records, &AssemblyOptions::from(&self.config));
                break;
            }
        }

        match &chosen {
            Some(name) => log::info!("Extracted {} holdings using {}", holdings.len(), name),
            None => {
                log::info!("No holdings found in statement");
                ctx.advise(Advisory::NoHoldingsFound);
            }
        }

        StatementExtraction {
            portfolio_value,
            holdings,
            strategy: chosen,
            advisories: ctx.into_advisories(),
        }
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

/// Extract with the default strategy order
pub fn extract_statement(document: &str, config: &ExtractionConfig) -> StatementExtraction {
    StatementExtractor::new(config.clone()).extract(document)
}
