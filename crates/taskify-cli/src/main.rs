//! Taskify CLI - Task tracker with productivity insights
//!
//! Usage:
//!   taskify add "Write report" --priority high   Add a task
//!   taskify list --search report                 List tasks
//!   taskify insights                             Show insights
//!   taskify serve --port 3000                    Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use taskify_core::{Config, NewTask, TaskFilter, TaskUpdate};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_file = data;
    }

    let data = config.data_file.as_path();

    match cli.command {
        Commands::List {
            search,
            priority,
            category,
        } => {
            let board = commands::open_board(data)?;
            let filter = TaskFilter {
                search,
                priority,
                category,
            };
            commands::cmd_list(&board, &filter)
        }
        Commands::Add {
            title,
            description,
            priority,
            category,
            due,
            ai_suggested,
        } => {
            let mut board = commands::open_board(data)?;
            let new = NewTask {
                title,
                description,
                completed: false,
                priority,
                category: category.unwrap_or_default(),
                due_date: due.as_deref().map(commands::parse_due_date).transpose()?,
                ai_suggested,
            };
            commands::cmd_add(&mut board, new)
        }
        Commands::Edit {
            id,
            title,
            description,
            clear_description,
            priority,
            category,
            due,
            clear_due,
        } => {
            let mut board = commands::open_board(data)?;
            let due_date = match (due, clear_due) {
                (Some(due), _) => Some(Some(commands::parse_due_date(&due)?)),
                (None, true) => Some(None),
                (None, false) => None,
            };
            let description = match (description, clear_description) {
                (Some(description), _) => Some(Some(description)),
                (None, true) => Some(None),
                (None, false) => None,
            };
            let update = TaskUpdate {
                title,
                description,
                priority,
                category,
                due_date,
                ..Default::default()
            };
            commands::cmd_edit(&mut board, &id, update)
        }
        Commands::Complete { id } => {
            let mut board = commands::open_board(data)?;
            commands::cmd_complete(&mut board, &id)
        }
        Commands::Delete { id } => {
            let mut board = commands::open_board(data)?;
            commands::cmd_delete(&mut board, &id)
        }
        Commands::Stats => commands::cmd_stats(&commands::open_board(data)?),
        Commands::Insights { json } => {
            let mut board = commands::open_board(data)?;
            commands::cmd_insights(&mut board, json)
        }
        Commands::Categories => commands::cmd_categories(&commands::open_board(data)?),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            let mut settings = config.server.clone();
            if let Some(host) = host {
                settings.host = host;
            }
            if let Some(port) = port {
                settings.port = port;
            }
            if static_dir.is_some() {
                settings.static_dir = static_dir;
            }
            commands::cmd_serve(data, &settings).await
        }
        Commands::Config => commands::cmd_config(&config),
    }
}
