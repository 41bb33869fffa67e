//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Sum the calibration values hidden in a text file
#[derive(Parser, Debug)]
#[command(name = "trebuchet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Calibration file to process (defaults to the configured input)
    pub input: Option<PathBuf>,

    /// TOML configuration file [default: trebuchet.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Count literal digits only, ignoring spelled-out numbers
    #[arg(long)]
    pub digits_only: bool,

    /// Print a per-line breakdown before the total
    #[arg(long)]
    pub report: bool,
}
