//! Cinedash CLI
//!
//! A server-rendered movie browsing dashboard, plus terminal commands for
//! the same curated listings.

use clap::Parser;
use cinedash::cli::{
    args::{Cli, Commands},
    commands::{browse, check, movie, serve},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run the appropriate command
    match cli.command {
        Commands::Serve { bind } => {
            serve::serve(bind).await?;
        }

        Commands::Browse { category, format } => {
            browse::browse(category, format).await?;
        }

        Commands::Movie { id, format } => {
            movie::movie(id, format).await?;
        }

        Commands::Check => {
            check::check().await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("cinedash=debug,tower_http=debug")
    } else {
        EnvFilter::new("cinedash=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
