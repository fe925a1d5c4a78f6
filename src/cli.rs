//! CLI command definitions and helpers for `faqgen`.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// faqgen - FAQ section HTML generator
#[derive(Debug, Parser)]
#[command(
    name = "faqgen",
    about = "Render a description and FAQ entries into a copy-paste-ready HTML section",
    version
)]
pub struct Cli {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render an input document (YAML or JSON) to HTML
    Render {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Write the HTML here instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Also copy the HTML to the system clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Write a starter input document
    Init {
        /// Destination (stdout when omitted)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Edit a form interactively
    Edit {
        /// Input document to start from
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

/// Parse a `--log-level` value. Case-insensitive; `WARNING` is accepted.
pub fn parse_log_level(s: &str) -> Option<Level> {
    match s.to_uppercase().as_str() {
        "TRACE" => Some(Level::TRACE),
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARN" | "WARNING" => Some(Level::WARN),
        "ERROR" => Some(Level::ERROR),
        _ => None,
    }
}

/// Build the log filter. An explicit level wins; otherwise the `RUST_LOG`
/// value (`env`) is used, and `warn` when that is missing or invalid.
pub fn log_filter(cli_level: Option<Level>, env: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::default().add_directive(level.into());
    }
    env.filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Runtime for the acknowledgement resets. The caller enters it and keeps
/// `main` synchronous, so the blocking prompt never holds a runtime task.
pub fn build_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
}

/// Write rendered HTML byte for byte, with no trailing newline.
pub fn write_html(out: &mut impl Write, html: &str) -> std::io::Result<()> {
    out.write_all(html.as_bytes())?;
    out.flush()
}
