use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::process::Algorithm;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a process list to the scheduling service and print the results
    Simulate {
        /// Process list file, one "begin duration priority" triple per line
        #[arg(short, long)]
        input: String,
        /// Scheduling algorithm to request
        #[arg(short, long, value_enum)]
        alg: Algorithm,
        /// Quantum length in time units
        #[arg(short, long, default_value_t = 2)]
        quantum: i64,
        /// Priority boost interval, required by round-robin with aging
        #[arg(short = 'g', long)]
        aging: Option<i64>,
        /// Path to a service config YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Scheduling service base URL, overrides the config file
        #[arg(short = 'u', long)]
        base_url: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
