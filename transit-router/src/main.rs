use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use transit_router::document::{self, DocumentError};

/// Log level used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_LEVEL: &str = "warn";

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(input: Option<String>) -> Result<(), DocumentError> {
    let doc = match input.as_deref() {
        None | Some("-") => document::load(io::stdin().lock())?,
        Some(path) => {
            info!(path, "reading input document");
            document::read_path(path)?
        }
    };
    let responses = document::answer_document(&doc)?;
    document::write(BufWriter::new(io::stdout().lock()), &responses)
}

fn main() -> ExitCode {
    init_logging();

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
