//! enterprise_finder - print client/enterprise SIRET records from a CSV export

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use enterprise_finder::config::{Config, DEFAULT_INPUT};
use enterprise_finder::error::Error;
use enterprise_finder::output::render_to_stdout;
use enterprise_finder::parser::CsvParser;

/// Print client/enterprise SIRET records from a CSV export
#[derive(Parser, Debug)]
#[command(name = "enterprise_finder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file to read
    #[arg(default_value = DEFAULT_INPUT)]
    file: PathBuf,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The open-failure diagnostic is a fixed string; everything else
            // gets the full error chain.
            if matches!(e.downcast_ref::<Error>(), Some(Error::Open(_))) {
                eprintln!("Error opening file");
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.file);

    let parsed = CsvParser::parse(&config.input)?;
    render_to_stdout(&parsed)?;

    Ok(())
}
