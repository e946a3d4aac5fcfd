//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// summaryr: R-style per-column summaries of tabular data
#[derive(Parser)]
#[command(name = "summaryr")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize every column of a data file
    Describe(DescribeArgs),

    /// Show the inferred type of every column
    Schema {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field delimiter (auto-detected when omitted)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Read at most this many data rows
        #[arg(long)]
        max_rows: Option<usize>,
    },
}

#[derive(Args)]
pub struct DescribeArgs {
    /// Path to the data file (CSV/TSV)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Give integer columns numeric statistics instead of value counts
    #[arg(long)]
    pub int_as_numeric: bool,

    /// Pool categories seen fewer times than this (when at least two are)
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Print the bold-headed console summary (default unless --json)
    #[arg(long)]
    pub pretty: bool,

    /// Print the summary as JSON; with --pretty the console summary goes to stderr
    #[arg(long)]
    pub json: bool,

    /// JSON file with summary options; command-line flags take precedence
    #[arg(long, value_name = "OPTIONS_FILE")]
    pub options: Option<PathBuf>,

    /// Write the JSON summary to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field delimiter (auto-detected when omitted)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Read at most this many data rows
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Read integer columns with missing cells as floats
    #[arg(long)]
    pub int_nulls_as_float: bool,

    /// Do not detect date/time columns
    #[arg(long)]
    pub no_dates: bool,
}
