//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taskify_core::Priority;

/// Taskify - Track tasks and get insights on your workload
#[derive(Parser)]
#[command(name = "taskify")]
#[command(about = "Task tracker with rule-based productivity insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Task file (defaults to the configured data_file)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Config file (defaults to ~/.local/share/taskify/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks, newest first
    List {
        /// Only tasks whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only tasks with this priority (low, medium, high)
        #[arg(short, long)]
        priority: Option<Priority>,

        /// Only tasks in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,

        /// Priority: low, medium, high
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Category (defaults to General)
        #[arg(short, long)]
        category: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Mark the task as AI-suggested
        #[arg(long)]
        ai_suggested: bool,
    },

    /// Edit a task
    Edit {
        /// Task ID (or unique prefix)
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long, conflicts_with = "clear_description")]
        description: Option<String>,

        /// Remove the description
        #[arg(long)]
        clear_description: bool,

        /// New priority: low, medium, high
        #[arg(short, long)]
        priority: Option<Priority>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },

    /// Toggle a task between open and completed
    Complete {
        /// Task ID (or unique prefix)
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task ID (or unique prefix)
        id: String,
    },

    /// Show task statistics
    Stats,

    /// Show insights for the current task list
    Insights {
        /// Print raw JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// List known categories
    Categories,

    /// Start the web server
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,
}
