//! Holdings extraction strategies
//!
//! Statements vary in layout, so holdings are located by an ordered list of
//! strategies. The extractor uses the first one whose validated output is
//! non-empty.

use super::{
    line_matcher::match_holding_line, section::locate_section, Advisory, HoldingCandidate,
    ParseContext,
};
use crate::config::ExtractionConfig;

/// One approach to finding holdings lines in a statement
pub trait HoldingsStrategy: Send + Sync {
    /// Stable identifier, reported on the extraction result
    fn name(&self) -> &'static str;

    /// Collect holding candidates; validation happens afterwards
    fn extract(
        &self,
        content: &str,
        config: &ExtractionConfig,
        ctx: &mut ParseContext,
    ) -> Vec<HoldingCandidate>;
}

/// All strategies in priority order
pub fn default_strategies() -> Vec<Box<dyn HoldingsStrategy>> {
    vec![Box::new(WholeDocumentStrategy), Box::new(SectionBoundedStrategy)]
}

/// Match every line of the statement
pub struct WholeDocumentStrategy;

impl HoldingsStrategy for WholeDocumentStrategy {
    fn name(&self) -> &'static str {
        "whole_document"
    }

    fn extract(
        &self,
        content: &str,
        _config: &ExtractionConfig,
        ctx: &mut ParseContext,
    ) -> Vec<HoldingCandidate> {
        scan_lines(self.name(), content.lines(), ctx)
    }
}

/// Match only lines between the configured section markers
pub struct SectionBoundedStrategy;

impl SectionBoundedStrategy {
    fn is_skipped(line: &str, config: &ExtractionConfig) -> bool {
        config.header_lines.iter().any(|h| h == line) || config.is_noise(line)
    }
}

impl HoldingsStrategy for SectionBoundedStrategy {
    fn name(&self) -> &'static str {
        "section_bounded"
    }

    fn extract(
        &self,
        content: &str,
        config: &ExtractionConfig,
        ctx: &mut ParseContext,
    ) -> Vec<HoldingCandidate> {
        let section = locate_section(content, &config.section_start, &config.section_end);
        if section.trim().is_empty() {
            log::debug!(
                "Section '{}'..'{}' not found",
                config.section_start,
                config.section_end
            );
            ctx.advise(Advisory::SectionNotFound {
                start: config.section_start.clone(),
                end: config.section_end.clone(),
            });
            return Vec::new();
        }

        let lines = section
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !Self::is_skipped(line, config));
        scan_lines(self.name(), lines, ctx)
    }
}

fn scan_lines<'a>(
    strategy: &str,
    lines: impl Iterator<Item = &'a str>,
    ctx: &mut ParseContext,
) -> Vec<HoldingCandidate> {
    let mut candidates = Vec::new();
    for line in lines {
        match match_holding_line(line) {
            Ok(Some(candidate)) => {
                log::debug!("{}: matched '{}'", strategy, candidate.name);
                candidates.push(candidate);
            }
            Ok(None) => {}
            Err(e) => ctx.malformed(strategy, line, e.to_string()),
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SECTIONED: &str = r#"
Account Overview
Your Net Portfolio Value: $1,234,567.89
Top Holdings
Description
AAPL $320,000.00 25%
Balance Details $1.00 1%
MSFT $240,000.00 19%
Total
Asset Allocation
Equities $800,000.00 68%
"#;

    fn names(candidates: &[HoldingCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_whole_document_scans_everything() {
        let mut ctx = ParseContext::new();
        let config = ExtractionConfig::default();
        let candidates = WholeDocumentStrategy.extract(SECTIONED, &config, &mut ctx);
        assert_eq!(names(&candidates), vec!["AAPL", "Balance Details", "MSFT", "Equities"]);
    }

    #[test]
    fn test_section_bounded_skips_headers_and_noise() {
        let mut ctx = ParseContext::new();
        let config = ExtractionConfig::default();
        let candidates = SectionBoundedStrategy.extract(SECTIONED, &config, &mut ctx);
        assert_eq!(names(&candidates), vec!["AAPL", "MSFT"]);
        assert_eq!(candidates[1].raw_value, dec!(240000));
        assert!(ctx.advisories().is_empty());
    }

    #[test]
    fn test_section_missing_records_advisory() {
        let mut ctx = ParseContext::new();
        let config = ExtractionConfig::default();
        let candidates = SectionBoundedStrategy.extract("AAPL $320,000.00 25%", &config, &mut ctx);
        assert!(candidates.is_empty());
        assert_eq!(
            ctx.advisories(),
            &[Advisory::SectionNotFound {
                start: "Top Holdings".to_string(),
                end: "Asset Allocation".to_string(),
            }]
        );
    }

    #[test]
    fn test_custom_markers() {
        let config = ExtractionConfig {
            section_start: "Positions".to_string(),
            section_end: "Activity".to_string(),
            ..Default::default()
        };
        let content = "Positions\nVTI $180,000.00 15%\nActivity\nTSLA $1.00 1%";
        let mut ctx = ParseContext::new();
        let candidates = SectionBoundedStrategy.extract(content, &config, &mut ctx);
        assert_eq!(names(&candidates), vec!["VTI"]);
    }

    #[test]
    fn test_malformed_lines_recorded() {
        let mut ctx = ParseContext::new();
        let candidates = WholeDocumentStrategy.extract(
            "Bond $1,000.00 2.5%\nVTI $180,000.00 15%",
            &ExtractionConfig::default(),
            &mut ctx,
        );
        assert_eq!(names(&candidates), vec!["VTI"]);
        assert_eq!(ctx.advisories().len(), 1);
    }

    #[test]
    fn test_default_order() {
        let order: Vec<_> = default_strategies().iter().map(|s| s.name()).collect();
        assert_eq!(order, vec!["whole_document", "section_bounded"]);
    }
}
