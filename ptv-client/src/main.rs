use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use ptv_client::config::{self, ClientConfig, ConfigError, Credentials};
use ptv_client::signing::Query;
use ptv_client::timetable::{ApiError, PtvClient};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Errors that end the CLI with a non-zero status.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to format response body: {0}")]
    Format(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("no query entered")]
    EmptyQuery,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the request output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "request failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let strict = std::env::args().skip(1).any(|arg| arg == "--strict");

    if let Some(path) = config::load_dotenv()? {
        debug!(path = %path.display(), "loaded .env file");
    }
    let credentials = Credentials::from_env()?;
    let config = ClientConfig::from_env()?;
    let client = PtvClient::new(&credentials, &config)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "Enter the query you want to run: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let query = parse_query(&line)?;

    writeln!(stdout, "Generated URL: {}", client.signed_url(&query)?)?;

    let response = client.call(&query, strict)?;
    writeln!(stdout, "Response code: {}", response.status)?;
    writeln!(stdout, "Response body:")?;
    writeln!(stdout, "{}", response.pretty_body()?)?;

    Ok(())
}

/// Parse the entered line, rejecting blank input (including EOF).
fn parse_query(line: &str) -> Result<Query, CliError> {
    if line.trim().is_empty() {
        return Err(CliError::EmptyQuery);
    }
    Ok(Query::parse(line))
}
