//! Command line argument parsing for the PeopleLens CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// PeopleLens - a conversational HR analytics assistant
#[derive(Parser, Debug, Clone)]
#[command(name = "peoplelens")]
#[command(about = "Ask questions about an HR dataset from the command line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PeopleLensArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PeopleLensArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Answer a single question about the dataset
    Ask(AskArgs),

    /// Interactive question loop on stdin
    Chat(ChatArgs),

    /// List the recognized metrics
    Metrics,

    /// Show a summary of the dataset
    Stats(StatsArgs),
}

/// Arguments for answering a single question
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// Path to the HR dataset (CSV)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// The question to answer
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Path to the HR dataset (CSV)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,
}

/// Arguments for the dataset summary
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the HR dataset (CSV)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,
}
