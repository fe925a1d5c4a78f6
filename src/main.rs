//! faqgen - FAQ section HTML generator
//!
//! CLI entry point: one-shot rendering, starter documents, and the
//! interactive editing prompt.

use std::path::Path;

use clap::Parser;
use eyre::{Context, Result, bail};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use faq_html::cli::{self, Cli, Command};
use faq_html::clipboard::Clipboard;
use faq_html::{FaqForm, MemoryClipboard, RenderInput, input, repl};

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let level = match cli_log_level {
        Some(s) => {
            let level = cli::parse_log_level(s);
            if level.is_none() {
                eprintln!("Warning: Unknown log-level '{}', using RUST_LOG or WARN", s);
            }
            level
        }
        None => None,
    };
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Logs go to stderr so rendered HTML on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(cli::log_filter(level, env.as_deref()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize logging: {}", e))?;

    debug!(?level, "logging initialized");
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(args.log_level.as_deref()).context("Failed to setup logging")?;

    let runtime = cli::build_runtime().context("Failed to start the Tokio runtime")?;
    let _guard = runtime.enter();

    debug!(command = ?args.command, "main: dispatching command");
    match args.command {
        Command::Render { input, output, copy } => cmd_render(&input, output.as_deref(), copy),
        Command::Init { path, force } => cmd_init(path.as_deref(), force),
        Command::Edit { input } => cmd_edit(input.as_deref()),
    }
}

/// Render a document to stdout or a file
fn cmd_render(path: &Path, output: Option<&Path>, copy: bool) -> Result<()> {
    let doc = RenderInput::load(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let html = doc.to_html();

    match output {
        Some(out) => {
            std::fs::write(out, &html).with_context(|| format!("Failed to write {}", out.display()))?;
            info!(path = %out.display(), bytes = html.len(), "wrote HTML");
        }
        None => cli::write_html(&mut std::io::stdout().lock(), &html).context("Failed to write HTML to stdout")?,
    }

    if copy {
        let mut clipboard = open_clipboard()?;
        clipboard.set_text(&html).context("Failed to copy to clipboard")?;
        eprintln!("Copied!");
    }
    Ok(())
}

/// Write the starter document
fn cmd_init(path: Option<&Path>, force: bool) -> Result<()> {
    let starter = input::starter();
    match path {
        Some(path) => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            input::save(path, &starter).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", input::to_yaml(&starter)?),
    }
    Ok(())
}

/// Interactive editing prompt
fn cmd_edit(path: Option<&Path>) -> Result<()> {
    let mut form = match path {
        Some(path) => {
            let doc = RenderInput::load(path).with_context(|| format!("Failed to load {}", path.display()))?;
            FaqForm::from_input(doc)
        }
        None => FaqForm::new(),
    };
    // Without a system clipboard the prompt still works; copies stay in memory.
    let mut clipboard = open_clipboard().unwrap_or_else(|e| {
        warn!(error = %e, "falling back to in-memory clipboard");
        Box::new(MemoryClipboard::new()) as Box<dyn Clipboard>
    });
    repl::run(&mut form, clipboard.as_mut())
}

#[cfg(feature = "clipboard")]
fn open_clipboard() -> Result<Box<dyn Clipboard>> {
    let clipboard = faq_html::SystemClipboard::new().context("Failed to open the system clipboard")?;
    Ok(Box::new(clipboard))
}

#[cfg(not(feature = "clipboard"))]
fn open_clipboard() -> Result<Box<dyn Clipboard>> {
    bail!("faqgen was built without clipboard support (enable the `clipboard` feature)")
}
