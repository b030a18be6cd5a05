pub mod export;
pub mod review;
pub mod show;
pub mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "data-review",
    version,
    about = "Review customer records with validation errors and export them to CSV"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Where to load records from: an http(s) URL or a JSON file path
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the records table with error markers
    Table {
        /// Output format
        #[arg(long, default_value = "terminal", value_parser = ["terminal", "json", "html"])]
        format: String,
        /// Output file path (stdout if not specified)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the detail view for one record
    Show {
        /// Record ID
        id: i64,
        /// Print the detail view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export all records to CSV
    Export {
        /// Directory to write the export into (overrides config)
        #[arg(long, conflicts_with = "stdout")]
        dir: Option<PathBuf>,
        /// Write the CSV to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },
    /// Review records interactively, one command per line on stdin
    Review,
}
