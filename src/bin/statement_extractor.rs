//! Statement extraction front-end.
//!
//! Reads a statement (plain text, or a PDF whose text is extracted first),
//! runs the extraction engine and prints the dashboard view plus the summary
//! prompt as JSON.
//!
//! Usage: statement_extractor <statement.txt|statement.pdf> [config.json]
//! Output: JSON on stdout, logs and errors on stderr (RUST_LOG controls verbosity)
//! Exit codes:
//!   0 - Success
//!   1 - Invalid arguments
//!   2 - Statement read error
//!   3 - PDF extraction error
//!   4 - Config error
//!   5 - Output write error

use anyhow::{anyhow, Context};
use statement_lib::ai::prompts::build_summary_prompt;
use statement_lib::dashboard::{DashboardView, DEFAULT_BAR_LIMIT};
use statement_lib::{ExtractionConfig, StatementExtractor};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// PDF magic bytes
const PDF_MAGIC: &[u8] = b"%PDF";

enum Failure {
    Read(anyhow::Error),
    Extract(anyhow::Error),
    Config(anyhow::Error),
    Output(anyhow::Error),
}

impl Failure {
    fn report(&self) -> ExitCode {
        let (tag, code, error) = match self {
            Self::Read(e) => ("READ_ERROR", 2, e),
            Self::Extract(e) => ("EXTRACT_ERROR", 3, e),
            Self::Config(e) => ("CONFIG_ERROR", 4, e),
            Self::Output(e) => ("WRITE_ERROR", 5, e),
        };
        eprintln!("{}:{:#}", tag, error);
        ExitCode::from(code)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_statement(path: &Path) -> Result<String, Failure> {
    let bytes = fs::read(path)
        .with_context(|| format!("reading {}", path.display()))
        .map_err(Failure::Read)?;

    if bytes.starts_with(PDF_MAGIC) {
        log::info!("Extracting text from PDF {}", path.display());
        return pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| Failure::Extract(anyhow!("failed to extract text from PDF: {}", e)));
    }

    String::from_utf8(bytes)
        .with_context(|| format!("{} is neither a PDF nor UTF-8 text", path.display()))
        .map_err(Failure::Read)
}

fn load_config(path: Option<&String>) -> Result<ExtractionConfig, Failure> {
    match path {
        Some(path) => ExtractionConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path))
            .map_err(Failure::Config),
        None => Ok(ExtractionConfig::default()),
    }
}

fn run(args: &[String]) -> Result<(), Failure> {
    let config = load_config(args.get(2))?;
    let content = read_statement(Path::new(&args[1]))?;

    let extraction = StatementExtractor::new(config).extract(&content);
    let dashboard = DashboardView::from_extraction(&extraction, DEFAULT_BAR_LIMIT);
    let summary_prompt = build_summary_prompt(&extraction.portfolio_value, &extraction.holdings);

    let output = serde_json::json!({
        "strategy": extraction.strategy,
        "dashboard": dashboard,
        "summaryPrompt": summary_prompt,
    });
    let rendered = serde_json::to_string_pretty(&output)
        .context("serializing output")
        .map_err(Failure::Output)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", rendered)
        .context("writing output")
        .map_err(Failure::Output)
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: statement_extractor <statement.txt|statement.pdf> [config.json]");
        return ExitCode::from(1);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => failure.report(),
    }
}
