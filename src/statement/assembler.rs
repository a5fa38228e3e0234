//! Final ordering and capping of holdings

use super::HoldingRecord;
use crate::config::ExtractionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyOptions {
    pub sort_by_value: bool,
    pub top_n: Option<usize>,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            sort_by_value: true,
            top_n: None,
        }
    }
}

impl From<&ExtractionConfig> for AssemblyOptions {
    fn from(config: &ExtractionConfig) -> Self {
        Self {
            sort_by_value: config.sort_by_value,
            top_n: config.top_n,
        }
    }
}

/// Order by value (largest first) and cap to `top_n`.
///
/// The sort is stable, so equal values keep statement order. Duplicates are
/// kept.
pub fn assemble(mut records: Vec<HoldingRecord>, options: &AssemblyOptions) -> Vec<HoldingRecord> {
    if options.sort_by_value {
        records.sort_by(|a, b| b.raw_value().cmp(&a.raw_value()));
    }
    if let Some(top_n) = options.top_n {
        records.truncate(top_n);
    }
    records
}
