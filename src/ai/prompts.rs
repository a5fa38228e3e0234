//! Summary prompt building
//!
//! The holdings table is rendered as plain text so it can be embedded in the
//! user message verbatim.

use super::{ChatMessage, SummaryPrompt};
use crate::dashboard::format_currency;
use crate::statement::{HoldingRecord, PortfolioValue};

pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are a financial analyst assistant helping summarize brokerage portfolios.";

const EMPTY_TABLE: &str = "(no holdings found)";

/// Render holdings as a pipe-separated text table
pub fn render_holdings_table(holdings: &[HoldingRecord]) -> String {
    if holdings.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let mut lines = Vec::with_capacity(holdings.len() + 1);
    lines.push("Name | Value | Percent".to_string());
    lines.extend(holdings.iter().map(|h| {
        format!(
            "{} | {} | {}%",
            h.name(),
            format_currency(h.raw_value()),
            h.percent()
        )
    }));
    lines.join("\n")
}

/// Build the summary request for an extracted statement
pub fn build_summary_prompt(value: &PortfolioValue, holdings: &[HoldingRecord]) -> SummaryPrompt {
    let value_str = match value.amount() {
        Some(amount) => format_currency(amount),
        None => value.to_string(),
    };

    let user = format!(
        r#"Parse and summarize this portfolio statement.

Net portfolio value: {}

Holdings:
{}

Provide insights on allocation, concentration risk, and rebalancing opportunities."#,
        value_str,
        render_holdings_table(holdings)
    );

    SummaryPrompt {
        messages: vec![ChatMessage::system(SUMMARY_SYSTEM_PROMPT), ChatMessage::user(user)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::statement::extract_statement;

    const STATEMENT: &str = "\
Your Net Portfolio Value: $1,234,567.89
AAPL $320,000.00 25%
Total $1,280,000.00 100%
MSFT $240,000.00 19%";

    #[test]
    fn test_render_table() {
        let extraction = extract_statement(STATEMENT, &ExtractionConfig::default());
        assert_eq!(
            render_holdings_table(&extraction.holdings),
            "Name | Value | Percent\nAAPL | $320,000.00 | 25%\nMSFT | $240,000.00 | 19%"
        );
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_holdings_table(&[]), "(no holdings found)");
    }

    #[test]
    fn test_build_prompt() {
        let extraction = extract_statement(STATEMENT, &ExtractionConfig::default());
        let prompt = build_summary_prompt(&extraction.portfolio_value, &extraction.holdings);

        assert_eq!(prompt.messages.len(), 2);
        assert_eq!(prompt.messages[0].role, "system");
        assert_eq!(prompt.messages[0].content, SUMMARY_SYSTEM_PROMPT);

        let user = prompt.user_content().unwrap();
        assert!(user.contains("Net portfolio value: $1,234,567.89"));
        assert!(user.contains("AAPL | $320,000.00 | 25%"));
        assert!(!user.contains("Total"));
        assert!(user.ends_with("rebalancing opportunities."));
    }

    #[test]
    fn test_build_prompt_without_value() {
        let prompt = build_summary_prompt(&PortfolioValue::NotFound, &[]);
        let user = prompt.user_content().unwrap();
        assert!(user.contains("Net portfolio value: Not found"));
        assert!(user.contains("(no holdings found)"));
    }
}
