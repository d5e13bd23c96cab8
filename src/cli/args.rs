//! Command line argument definitions.

use clap::{Parser, Subcommand};

/// Promoter Report - Export promoter records from the warehouse
#[derive(Parser, Debug)]
#[command(name = "promoter-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch promoter records and print them
    Fetch {
        /// Output format: table, csv, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Check warehouse connectivity and credentials
    Check,
}
