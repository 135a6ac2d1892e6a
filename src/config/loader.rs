//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ExportToolConfig;
use crate::config::secret_string;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ExportToolConfig
/// 4. Applies environment variable overrides (SULU_EXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use sulu_export::config::loader::load_config;
///
/// let config = load_config("sulu-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExportToolConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: ExportToolConfig = toml::from_str(&contents)
        .map_err(|e| ExportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the SULU_EXPORT_* prefix
///
/// Environment variables follow the pattern: SULU_EXPORT_<SECTION>_<KEY>
/// For example: SULU_EXPORT_DATABASE_HOST, SULU_EXPORT_EXPORT_DIRECTORY
fn apply_env_overrides(config: &mut ExportToolConfig) {
    if let Ok(val) = std::env::var("SULU_EXPORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("SULU_EXPORT_DATABASE_HOST") {
        config.database.host = val;
    }
    if let Ok(val) = std::env::var("SULU_EXPORT_DATABASE_USER") {
        config.database.user = val;
    }
    if let Ok(val) = std::env::var("SULU_EXPORT_DATABASE_PASSWORD") {
        config.database.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("SULU_EXPORT_DATABASE_NAME") {
        config.database.name = val;
    }

    if let Ok(val) = std::env::var("SULU_EXPORT_EXPORT_DIRECTORY") {
        config.export.directory = val.into();
    }
    if let Ok(val) = std::env::var("SULU_EXPORT_EXPORT_UPLOADS_DIRECTORY") {
        config.export.uploads_directory = Some(val.into());
    }
    if let Ok(val) = std::env::var("SULU_EXPORT_EXPORT_UPLOADS_TIMEOUT_SECS") {
        if let Ok(secs) = val.parse() {
            config.export.uploads_timeout_secs = secs;
        }
    }

    if let Ok(val) = std::env::var("SULU_EXPORT_REPOSITORY_CONSOLE_PATH") {
        config.repository.console_path = val;
    }
    if let Ok(val) = std::env::var("SULU_EXPORT_REPOSITORY_ROOT_PATH") {
        config.repository.root_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars_present() {
        std::env::set_var("SULU_EXPORT_TEST_SUBST", "secret-value");
        let input = "password = \"${SULU_EXPORT_TEST_SUBST}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("secret-value"));
        std::env::remove_var("SULU_EXPORT_TEST_SUBST");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let input = "password = \"${SULU_EXPORT_TEST_DEFINITELY_UNSET}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err
            .to_string()
            .contains("SULU_EXPORT_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# reference: ${SULU_EXPORT_TEST_COMMENTED}\nhost = \"localhost\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${SULU_EXPORT_TEST_COMMENTED}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/sulu-export.toml").unwrap_err();
        assert!(matches!(err, ExportError::Configuration(_)));
        assert!(err.to_string().contains("not found"));
    }
}
