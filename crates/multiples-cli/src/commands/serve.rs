use anyhow::Result;
use colored::Colorize;
use multiples_app::Config;

pub async fn run(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    // Update config with CLI arguments
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!("{} Starting multiples server...", "▶".green());
    println!(
        "  {} http://{}",
        "Listening on:".dimmed(),
        config.server_addr()
    );
    println!(
        "  {} {}",
        "Maximum bound:".dimmed(),
        config.calculator.max_bound
    );
    println!();

    // Start the server
    multiples_app::server::run(config).await?;

    Ok(())
}
