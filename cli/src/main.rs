//! wtext CLI - print the text runs of an unpacked Word document part
//!
//! Reads `word/document.xml` from a directory the `.docx` was unzipped into
//! and writes the joined `<w:t>` contents to stdout.

use clap::{Parser, ValueEnum};
use colored::*;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wtext::{ExtractOptions, ScanMode, DEFAULT_DOCUMENT_PATH};

/// Print the text runs of a Word document.xml part
#[derive(Parser, Debug)]
#[command(
    name = "wtext",
    author = "iyulab",
    version,
    about = "Extract the <w:t> text runs of a Word document.xml",
    long_about = "wtext - print the text runs of an unpacked Word document part.\n\n\
                  Scans document.xml for <w:t> elements and prints their contents \
                  joined by a single space."
)]
struct Cli {
    /// Input document.xml path
    #[arg(default_value = DEFAULT_DOCUMENT_PATH)]
    input: PathBuf,

    /// How text runs are located
    #[arg(long, default_value = "literal")]
    mode: Mode,

    /// Separator placed between runs
    #[arg(long, default_value = " ")]
    separator: String,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

/// Scan mode
#[derive(Clone, Debug, ValueEnum)]
enum Mode {
    /// Pattern scan, run content kept verbatim
    Literal,
    /// XML tokenizer, entities decoded
    Xml,
}

impl From<Mode> for ScanMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Literal => ScanMode::Literal,
            Mode::Xml => ScanMode::Xml,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    debug!("wtext v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", cli);

    let stdout = io::stdout();
    if let Err(e) = run(cli, &mut stdout.lock()) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExtractOptions::new()
        .with_mode(cli.mode.into())
        .with_separator(cli.separator);

    let text = wtext::extract_with_options(&cli.input, &options)?;
    debug!(chars = text.chars().count(), "extraction finished");

    write_output(out, &text)?;
    Ok(())
}

fn write_output(out: &mut impl Write, content: &str) -> io::Result<()> {
    writeln!(out, "{}", content)?;
    out.flush()
}

fn init_logging(cli: &Cli) {
    let level = if let Some(level_str) = &cli.log_level {
        parse_level(level_str)
    } else if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("WTEXT_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        parse_level(&level_str)
    };

    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!("wtext={level}"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}
