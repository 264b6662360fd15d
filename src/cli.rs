// src/cli.rs

//! Command-line front end: `genroots <N>` prints `roots.h` for `N` roots.

use std::fs;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueHint};
use thiserror::Error;
use tracing::{info, Level};

use crate::common::TableError;
use crate::render::DATE_FORMAT;
use crate::table::RootTable;

#[derive(Parser, Debug)]
#[command(name = "genroots", version)]
#[command(about = "Generate a bit-reversed table of 8-bit roots of unity as a C header")]
pub struct Cli {
    /// Number of roots to generate (a power of two, at least 2)
    #[arg(allow_negative_numbers = true)]
    pub n: Option<String>,

    /// Write the header to this file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Date stamped in the header (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Maximum level for the stderr log.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    /// No size given; the caller prints usage and exits successfully.
    #[error("missing number of roots")]
    MissingSize,
    #[error("invalid number of roots '{arg}': {source}")]
    InvalidSize {
        arg: String,
        #[source]
        source: ParseIntError,
    },
    #[error("number of roots cannot be negative, got {0}")]
    NegativeSize(i64),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to format root table")]
    Format(#[from] std::fmt::Error),
}

/// Parses the size argument as a decimal integer.
pub fn parse_size(arg: &str) -> Result<usize, CliError> {
    let value: i64 = arg.trim().parse().map_err(|source| CliError::InvalidSize {
        arg: arg.to_owned(),
        source,
    })?;
    usize::try_from(value).map_err(|_| CliError::NegativeSize(value))
}

/// Builds the complete header text for `n` roots stamped with `date`.
pub fn generate_header(n: usize, date: NaiveDate) -> Result<String, CliError> {
    let table = RootTable::new(n)?;
    let mut text = String::new();
    table.render(&mut text, date.format(DATE_FORMAT))?;
    Ok(text)
}

/// Runs one invocation. `today` is used when `--date` is absent.
pub fn run(cli: &Cli, today: NaiveDate) -> Result<(), CliError> {
    let arg = cli.n.as_deref().ok_or(CliError::MissingSize)?;
    let n = parse_size(arg)?;
    let date = cli.date.unwrap_or(today);

    let text = generate_header(n, date)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &text).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            info!(n, path = %path.display(), "wrote root table");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(text.as_bytes())
                .and_then(|()| lock.flush())
                .map_err(|source| CliError::Io {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
            info!(n, "wrote root table to stdout");
        }
    }

    Ok(())
}
