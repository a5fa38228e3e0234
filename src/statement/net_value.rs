//! Net portfolio value extraction

use super::{numbers::parse_currency, Advisory, ParseContext, PortfolioValue};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NET_VALUE_LABEL: &str = "Your Net Portfolio Value:";

// Label and amount must sit on the same line
static RE_NET_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Your Net Portfolio Value:[ \t]*\$[ \t]*(\d[\d,]*(?:\.\d+)?)").unwrap()
});

/// Find the first "Your Net Portfolio Value: $..." figure that parses.
///
/// A labeled amount that is not valid currency does not count as a match,
/// so scanning continues with the next label. Once a valid amount is found,
/// later restatements are ignored.
pub fn extract_net_value(content: &str, ctx: &mut ParseContext) -> PortfolioValue {
    for caps in RE_NET_VALUE.captures_iter(content) {
        match parse_currency(&caps[1]) {
            Ok(amount) => {
                log::debug!("Net portfolio value: {}", amount);
                return PortfolioValue::Found(amount);
            }
            Err(e) => log::warn!("Skipping unreadable net portfolio value: {}", e),
        }
    }

    log::warn!("No readable '{}' line in statement", NET_VALUE_LABEL);
    ctx.advise(Advisory::ValueNotFound);
    PortfolioValue::NotFound
}
