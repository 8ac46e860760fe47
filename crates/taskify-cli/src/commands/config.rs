//! Configuration command

use anyhow::{Context, Result};
use taskify_core::Config;

pub fn cmd_config(config: &Config) -> Result<()> {
    match &config.source {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => println!("# Built-in defaults"),
    }

    let rendered = toml::to_string_pretty(config).context("Failed to render config")?;
    print!("{}", rendered);

    Ok(())
}
