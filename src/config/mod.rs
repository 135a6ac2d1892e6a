//! Configuration management for sulu-export.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation. All export parameters — database credentials, export
//! directory, uploads directory — come from the configuration file and the
//! environment, never from CLI arguments.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sulu_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("sulu-export.toml")?;
//!
//! println!("Database: {}", config.database.name);
//! println!("Export directory: {}", config.export.directory.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [database]
//! host = "127.0.0.1"
//! user = "sulu"
//! password = "${SULU_EXPORT_DB_PASSWORD}"
//! name = "sulu"
//!
//! [export]
//! directory = "var/export"
//! uploads_directory = "var/uploads"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for substitution inside the TOML file, and
//! `SULU_EXPORT_<SECTION>_<KEY>` variables to override individual settings.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, DatabaseConfig, ExportConfig, ExportToolConfig, LoggingConfig,
    RepositoryConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
