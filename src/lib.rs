//! Brokerage statement extraction
//!
//! Reads the decoded text of a brokerage statement and produces the net
//! portfolio value plus a validated holdings list, ready for the dashboard
//! and the summary prompt.

pub mod ai;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod statement;

pub use config::ExtractionConfig;
pub use error::{Result, StatementError};
pub use statement::{
    extract_statement, Advisory, HoldingRecord, PortfolioValue, StatementExtraction,
    StatementExtractor,
};
