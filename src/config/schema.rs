//! Configuration schema types
//!
//! This module defines the configuration structure for sulu-export. All
//! parameters are supplied through the TOML file and the environment; the
//! `export` command itself takes no positional arguments.

use crate::config::{secret_string, SecretString};
use crate::domain::constants;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main sulu-export configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportToolConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Database connection parameters for the dump stage
    pub database: DatabaseConfig,

    /// Export directory and uploads settings
    pub export: ExportConfig,

    /// Content repository export settings
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExportToolConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.database.validate()?;
        self.export.validate()?;
        self.repository.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Database connection parameters consumed by the dump stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database host
    #[serde(default = "default_database_host")]
    pub host: String,

    /// Database user
    pub user: String,

    /// Database password; an empty password omits the password flag from the
    /// dump invocation entirely
    #[serde(default = "default_password")]
    pub password: SecretString,

    /// Database name
    pub name: String,

    /// Path to the dump executable
    #[serde(default = "default_mysqldump_path")]
    pub mysqldump_path: String,
}

impl DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("database.host must not be empty".to_string());
        }
        if self.user.is_empty() {
            return Err("database.user must not be empty".to_string());
        }
        if self.name.is_empty() {
            return Err("database.name must not be empty".to_string());
        }
        if self.mysqldump_path.is_empty() {
            return Err("database.mysqldump_path must not be empty".to_string());
        }
        Ok(())
    }

    /// Whether a password flag should be passed to the dump executable.
    pub fn has_password(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }
}

/// Export directory and uploads settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the three artifacts are written into
    pub directory: PathBuf,

    /// Uploads directory to archive; defaults to the platform media path
    /// when unset or empty
    #[serde(default)]
    pub uploads_directory: Option<PathBuf>,

    /// Timeout for the uploads archive stage, in seconds
    #[serde(default = "default_uploads_timeout_secs")]
    pub uploads_timeout_secs: u64,

    /// Path to the archive executable
    #[serde(default = "default_tar_path")]
    pub tar_path: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.as_os_str().is_empty() {
            return Err("export.directory must not be empty".to_string());
        }
        if self.uploads_timeout_secs == 0 {
            return Err("export.uploads_timeout_secs must be greater than zero".to_string());
        }
        if self.tar_path.is_empty() {
            return Err("export.tar_path must not be empty".to_string());
        }
        Ok(())
    }

    /// Effective uploads directory, falling back to the platform default
    /// media path when unset or empty.
    pub fn effective_uploads_directory(&self) -> PathBuf {
        match &self.uploads_directory {
            Some(dir) if !dir.as_os_str().is_empty() => dir.clone(),
            _ => PathBuf::from(constants::DEFAULT_MEDIA_PATH),
        }
    }
}

/// Content repository export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Path to the platform console binary that owns the repository export
    #[serde(default = "default_console_path")]
    pub console_path: String,

    /// Repository root path exported from the content repository
    #[serde(default = "default_repository_root")]
    pub root_path: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            console_path: default_console_path(),
            root_path: default_repository_root(),
        }
    }
}

impl RepositoryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.console_path.is_empty() {
            return Err("repository.console_path must not be empty".to_string());
        }
        if !self.root_path.starts_with('/') {
            return Err(format!(
                "repository.root_path '{}' must be an absolute repository path",
                self.root_path
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path must not be empty when file logging is enabled"
                .to_string());
        }
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_database_host() -> String {
    "127.0.0.1".to_string()
}

fn default_password() -> SecretString {
    secret_string(String::new())
}

fn default_mysqldump_path() -> String {
    "mysqldump".to_string()
}

fn default_tar_path() -> String {
    "tar".to_string()
}

fn default_uploads_timeout_secs() -> u64 {
    constants::DEFAULT_UPLOADS_TIMEOUT_SECS
}

fn default_console_path() -> String {
    "bin/console".to_string()
}

fn default_repository_root() -> String {
    constants::REPOSITORY_ROOT_PATH.to_string()
}

fn default_log_path() -> String {
    "var/log/sulu-export".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
