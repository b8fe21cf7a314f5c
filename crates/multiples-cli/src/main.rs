use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let config = multiples_app::Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => commands::serve::run(config, host, port).await,
        Commands::Classify {
            bound,
            json,
            columns,
        } => commands::classify::run(config, &bound, json, columns).await,
        Commands::Divisors => commands::divisors::run(),
        Commands::Config { write } => commands::config::run(config, write.as_deref()),
    }
}
