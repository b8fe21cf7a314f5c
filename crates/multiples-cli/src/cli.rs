use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "multiples")]
#[command(author, version, about = "Classify numbers as multiples of 3, 5 and 7")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true, env = "MULTIPLES_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the calculator web server
    Serve {
        /// Host address to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Classify every number from 0 to BOUND
    Classify {
        /// Inclusive upper bound (non-negative integer)
        #[arg(allow_hyphen_values = true)]
        bound: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Grid columns in text mode
        #[arg(long, short, default_value = "5", value_parser = clap::value_parser!(u16).range(1..))]
        columns: u16,
    },

    /// Show the divisor table and its colors
    Divisors,

    /// Print the effective configuration
    Config {
        /// Write the configuration to this path instead of printing it
        #[arg(long)]
        write: Option<PathBuf>,
    },
}
