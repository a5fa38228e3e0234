//! Candidate validation

use super::{HoldingCandidate, HoldingRecord};
use crate::config::contains_noise_word;
use rust_decimal::Decimal;

/// Keep candidates that look like real holdings.
///
/// Drops non-positive values, zero percentages and names containing a noise
/// word (totals, balance details, summaries). Order is preserved.
pub fn filter_candidates(
    candidates: Vec<HoldingCandidate>,
    noise_words: &[String],
) -> Vec<HoldingRecord> {
    candidates
        .into_iter()
        .filter(|c| {
            if c.raw_value <= Decimal::ZERO || c.percent == 0 {
                log::debug!("Skipping non-positive holding '{}'", c.name);
                return false;
            }
            if contains_noise_word(&c.name, noise_words) {
                log::debug!("Skipping noise line '{}'", c.name);
                return false;
            }
            true
        })
        .map(HoldingRecord::from_candidate)
        .collect()
}
