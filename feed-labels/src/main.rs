use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use feed_labels::RuleBook;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Normalize raw trip headsigns read from stdin, one per line.
#[derive(Debug, Parser)]
#[command(name = "feed-labels", version)]
struct Args {
    /// JSON rule book to use instead of the built-in tables.
    #[arg(long, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// Print the effective rule book as JSON and exit.
    #[arg(long)]
    dump_rules: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the labels.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("feed_labels=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let book = match &args.rules {
        Some(path) => match RuleBook::from_path(path) {
            Ok(book) => book,
            Err(e) => {
                error!(error = %e, "Failed to load rule book");
                return ExitCode::FAILURE;
            }
        },
        None => RuleBook::default(),
    };

    if args.dump_rules {
        return match book.to_json_pretty() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "Failed to serialize rule book");
                ExitCode::FAILURE
            }
        };
    }

    let canon = match book.build() {
        Ok(canon) => canon,
        Err(e) => {
            error!(error = %e, "Invalid rule book");
            return ExitCode::FAILURE;
        }
    };
    info!(
        merge_rules = canon.merger().table().len(),
        abbreviations = book.headsign_abbreviations.len(),
        "Rule book loaded"
    );

    let mut out = io::stdout().lock();
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "Failed to read stdin");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = writeln!(out, "{}", canon.normalize_headsign(&line)) {
            // Closed pipe, e.g. `| head`.
            if e.kind() == io::ErrorKind::BrokenPipe {
                break;
            }
            error!(error = %e, "Failed to write stdout");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
