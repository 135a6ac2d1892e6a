//! Export command implementation
//!
//! This module implements the `export` command: one fixed run of the three
//! export stages. All parameters come from configuration; the command itself
//! only controls the confirmation prompt and progress rendering.

use crate::config::load_config;
use crate::core::export::ExportOrchestrator;
use crate::domain::ExportError;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Suppress the progress bar (for non-interactive use)
    #[arg(short, long)]
    pub quiet: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Confirmation prompt (unless --yes)
        if !self.yes {
            println!("Export Configuration:");
            println!("  Database: {}@{}", config.database.user, config.database.host);
            println!("  Export directory: {}", config.export.directory.display());
            println!(
                "  Uploads directory: {}",
                config.export.effective_uploads_directory().display()
            );
            println!();
            print!("Proceed with export? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        let mut orchestrator = ExportOrchestrator::new(config);
        if self.quiet {
            orchestrator = orchestrator.without_progress();
        }

        match orchestrator.run().await {
            Ok(report) => {
                println!();
                println!("Successfully exported contents.");
                for artifact in report.artifacts() {
                    println!("  {}", artifact.display());
                }
                Ok(0)
            }
            Err(e) => {
                eprintln!();
                eprintln!("Export failed: {e}");
                let code = match &e {
                    ExportError::Configuration(_) => 2,
                    ExportError::Io(_) => 5,
                    _ => e.process_exit_code(),
                };
                Ok(code)
            }
        }
    }
}
