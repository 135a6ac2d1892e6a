//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the sulu-export configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Database Host: {}", config.database.host);
        println!("  Database User: {}", config.database.user);
        println!("  Database Name: {}", config.database.name);
        println!(
            "  Database Password: {}",
            if config.database.has_password() {
                "***"
            } else {
                "(none)"
            }
        );
        println!("  Export Directory: {}", config.export.directory.display());
        println!(
            "  Uploads Directory: {}",
            config.export.effective_uploads_directory().display()
        );
        println!(
            "  Uploads Timeout: {}s",
            config.export.uploads_timeout_secs
        );
        println!("  Console: {}", config.repository.console_path);
        println!("  Repository Root: {}", config.repository.root_path);
        println!();
        Ok(0)
    }
}
