//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "sulu-export.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set SULU_EXPORT_DB_PASSWORD in the environment or a .env file");
                println!("  3. Validate configuration: sulu-export validate-config");
                println!("  4. Run export: sulu-export export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Starter configuration content
    fn starter_config() -> &'static str {
        r#"# sulu-export configuration file
# Exports all contents (PHPCR, database, uploads) for the companion import tool.

[database]
host = "127.0.0.1"
user = "sulu"
password = "${SULU_EXPORT_DB_PASSWORD}"
name = "sulu"

[export]
# Directory the three artifacts are written into
directory = "var/export"
# Uploads directory to archive; defaults to var/uploads when omitted
#uploads_directory = "var/uploads"
# Timeout for the uploads archive stage, in seconds
uploads_timeout_secs = 300

[repository]
console_path = "bin/console"
root_path = "/cmf"

[application]
log_level = "info"

[logging]
local_enabled = false
local_path = "var/log/sulu-export"
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_creates_valid_starter_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sulu-export.toml");
        let args = InitArgs {
            output: output.to_string_lossy().into_owned(),
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 0);
        assert!(output.exists());

        // The starter file must load once the referenced variable is set
        std::env::set_var("SULU_EXPORT_DB_PASSWORD", "starter-secret");
        let config = crate::config::load_config(&output).unwrap();
        assert_eq!(config.database.name, "sulu");
        std::env::remove_var("SULU_EXPORT_DB_PASSWORD");
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sulu-export.toml");
        std::fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().into_owned(),
            force: false,
        };
        let code = args.execute().await.unwrap();
        assert_eq!(code, 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "existing");
    }
}
