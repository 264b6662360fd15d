use std::env;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use genroots::cli::{run, Cli, CliError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the generated header, so logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(&cli, Local::now().date_naive()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::MissingSize) => {
            let program = env::args().next().unwrap_or_else(|| "genroots".to_owned());
            println!("usage: {} [n]", program);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("genroots: {}", err);
            ExitCode::FAILURE
        }
    }
}
