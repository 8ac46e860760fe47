//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use taskify_core::{LoggingHandler, ServerSettings};

use super::open_board;

pub async fn cmd_serve(data_file: &Path, settings: &ServerSettings) -> Result<()> {
    println!("🚀 Starting Taskify web server...");
    println!("   Task file: {}", data_file.display());
    println!("   Listening: http://{}:{}", settings.host, settings.port);
    if let Some(dir) = &settings.static_dir {
        println!("   Static files: {}", dir.display());
    }
    if !settings.allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {}",
            settings.allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let mut board = open_board(data_file)?;
    board.set_apply_handler(Box::new(LoggingHandler));

    let static_dir = settings
        .static_dir
        .as_deref()
        .map(|p| p.to_str().context("Static dir path must be valid UTF-8"))
        .transpose()?;

    let config = taskify_server::ServerConfig::from_settings(settings);
    taskify_server::serve_with_config(board, &settings.host, settings.port, static_dir, config)
        .await?;

    Ok(())
}
