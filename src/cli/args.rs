//! Command line argument definitions.

use clap::{Parser, Subcommand};

/// Cinedash - Browse movies from your terminal or your browser
#[derive(Parser, Debug)]
#[command(name = "cinedash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the dashboard web server
    Serve {
        /// Socket address to bind (overrides config)
        #[arg(short, long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Print curated categories
    Browse {
        /// Category name (all categories when omitted)
        #[arg(value_name = "CATEGORY")]
        category: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Print one movie's detail record
    Movie {
        /// Movie identifier (e.g. tt1375666, or bare digits)
        #[arg(value_name = "ID")]
        id: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Check API key configuration and catalog connectivity
    Check,
}
