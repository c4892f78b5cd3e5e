use clap::{Parser, Subcommand};

/// CLI arguments for districts-cli
#[derive(Debug, Parser)]
#[command(
    name = "districts",
    version,
    about = "Sync the per-language district lookup tables against upstream reference data"
)]
pub struct CliArgs {
    /// Directory holding districts.<lang>.json and their scratch copies (default: current directory)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Override the upstream endpoint base URL
    #[arg(short = 'e', long = "endpoint", global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download the four per-language scratch documents into the data directory
    Fetch,

    /// Full reconciliation: correct labels, append new districts, audit duplicates, rewrite the tables
    Sync {
        /// Skip the fetch step and reuse existing scratch files
        #[arg(long)]
        offline: bool,
    },

    /// Report duplicate labels in the current local tables without writing anything
    Audit,
}
