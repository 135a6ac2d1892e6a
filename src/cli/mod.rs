//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for sulu-export using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// sulu-export - Sulu CMS content export tool
#[derive(Parser, Debug)]
#[command(name = "sulu-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "sulu-export.toml", env = "SULU_EXPORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SULU_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export all contents (PHPCR, database, uploads) to the export directory
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
