//! Strictly Coords - Unified CLI
//!
//! Converts Go board coordinates between formats.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_coords::{BoardSize, ConverterConfig, CoordFormat, CoordValue, all_formats, convert_text};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let size = config.size()?;
    info!(%size, "Using board size");

    match cli.command {
        Command::Convert { value, from, to } => {
            let from = from.unwrap_or(*config.default_from());
            let to = to.unwrap_or(*config.default_to());
            run_convert(&value, from, to, size, cli.json)
        }
        Command::Table { value, from } => {
            let from = from.unwrap_or(*config.default_from());
            run_table(&value, from, size, cli.json)
        }
    }
}

/// Load configuration: file, then environment, then command-line flags.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<ConverterConfig> {
    let mut config = ConverterConfig::load_or_default(&cli.config)?.with_env_overrides()?;
    if let Some(size) = cli.size {
        debug!(size, "Overriding board size from command line");
        config = config.with_board_size(size);
    }
    Ok(config)
}

/// Convert a single coordinate and print it
#[instrument]
fn run_convert(
    value: &str,
    from: CoordFormat,
    to: CoordFormat,
    size: BoardSize,
    json: bool,
) -> Result<()> {
    let converted = convert_text(value, from, to, size)?;
    if json {
        println!("{}", serde_json::to_string(&converted)?);
    } else {
        println!("{}", converted);
    }
    Ok(())
}

/// Print a coordinate in every format
#[instrument]
fn run_table(value: &str, from: CoordFormat, size: BoardSize, json: bool) -> Result<()> {
    let canonical = CoordValue::parse(value, from)?.to_canonical(size)?;
    let rows = all_formats(canonical, size)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{:<10} {}", row.format().to_string(), row);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_is_info() {
        assert_eq!(EnvFilter::new(DEFAULT_LOG_FILTER).to_string(), "info");
    }
}
