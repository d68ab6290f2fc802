//! Command-line interface for strictly_coords.

use clap::{Parser, Subcommand};
use strictly_coords::CoordFormat;

/// Strictly Coords - convert Go board coordinates between formats
#[derive(Parser, Debug)]
#[command(name = "strictly_coords")]
#[command(about = "Convert Go coordinates between canonical, flat, SGF, KGS and GTP forms", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (optional)
    #[arg(long, global = true, default_value = "coords.toml")]
    pub config: std::path::PathBuf,

    /// Board side length, overriding config and environment
    #[arg(short, long, global = true)]
    pub size: Option<usize>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a coordinate from one format to another
    Convert {
        /// Coordinate text in the source format
        value: String,

        /// Source format (canonical, flat, sgf, kgs, gtp)
        #[arg(short, long, value_parser = parse_format)]
        from: Option<CoordFormat>,

        /// Target format (canonical, flat, sgf, kgs, gtp)
        #[arg(short, long, value_parser = parse_format)]
        to: Option<CoordFormat>,
    },

    /// Show a coordinate in every format
    Table {
        /// Coordinate text in the source format
        value: String,

        /// Source format (canonical, flat, sgf, kgs, gtp)
        #[arg(short, long, value_parser = parse_format)]
        from: Option<CoordFormat>,
    },
}

fn parse_format(tag: &str) -> Result<CoordFormat, strictly_coords::CoordError> {
    CoordFormat::parse(tag)
}
