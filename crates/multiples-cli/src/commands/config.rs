use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use multiples_app::Config;

pub fn run(config: Config, write: Option<&Path>) -> Result<()> {
    match write {
        Some(path) => {
            config.save(path)?;
            println!("{} Wrote config to {}", "✓".green(), path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
