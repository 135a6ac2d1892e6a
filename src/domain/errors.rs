//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types. Every
//! failure is fatal to the run: there is no retry or local recovery anywhere,
//! so each variant carries enough context (stage name, exit code, captured
//! stderr) for the operator to diagnose the aborted run.

use crate::domain::stage::ExportStage;
use thiserror::Error;

/// Main sulu-export error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An external process exited non-zero
    #[error("{stage} export failed ({}): {diagnostic}", exit_code_label(.exit_code))]
    ProcessFailed {
        /// Stage whose subprocess failed
        stage: ExportStage,
        /// Exit code, `None` when the process was killed by a signal
        exit_code: Option<i32>,
        /// Captured stderr of the failed process
        diagnostic: String,
    },

    /// A stage exceeded its allotted time
    #[error("{stage} export timed out after {timeout_secs}s")]
    Timeout {
        /// Stage that timed out
        stage: ExportStage,
        /// The timeout that was exceeded
        timeout_secs: u64,
    },

    /// The repository export sub-operation failed
    #[error("Repository export failed: {0}")]
    Repository(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "killed by signal".to_string(),
    }
}

impl ExportError {
    /// Stage associated with the error, if any.
    pub fn stage(&self) -> Option<ExportStage> {
        match self {
            ExportError::ProcessFailed { stage, .. } | ExportError::Timeout { stage, .. } => {
                Some(*stage)
            }
            ExportError::Repository(_) => Some(ExportStage::Repository),
            _ => None,
        }
    }

    /// Process exit code to propagate as the tool's own exit code.
    ///
    /// A failed subprocess's status is surfaced where known, otherwise a
    /// generic failure code.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            ExportError::ProcessFailed {
                exit_code: Some(code),
                ..
            } => *code,
            _ => 1,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ExportError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_process_failed_display() {
        let err = ExportError::ProcessFailed {
            stage: ExportStage::Database,
            exit_code: Some(2),
            diagnostic: "Access denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "database export failed (exit code 2): Access denied"
        );
    }

    #[test]
    fn test_process_failed_signal_display() {
        let err = ExportError::ProcessFailed {
            stage: ExportStage::Uploads,
            exit_code: None,
            diagnostic: String::new(),
        };
        assert!(err.to_string().contains("killed by signal"));
    }

    #[test]
    fn test_timeout_display() {
        let err = ExportError::Timeout {
            stage: ExportStage::Uploads,
            timeout_secs: 300,
        };
        assert_eq!(err.to_string(), "uploads export timed out after 300s");
    }

    #[test]
    fn test_stage_accessor() {
        let err = ExportError::Timeout {
            stage: ExportStage::Uploads,
            timeout_secs: 300,
        };
        assert_eq!(err.stage(), Some(ExportStage::Uploads));
        assert_eq!(
            ExportError::Repository("boom".into()).stage(),
            Some(ExportStage::Repository)
        );
        assert_eq!(ExportError::Io("disk full".into()).stage(), None);
    }

    #[test]
    fn test_process_exit_code_propagation() {
        let failed = ExportError::ProcessFailed {
            stage: ExportStage::Database,
            exit_code: Some(23),
            diagnostic: String::new(),
        };
        assert_eq!(failed.process_exit_code(), 23);

        let timeout = ExportError::Timeout {
            stage: ExportStage::Uploads,
            timeout_secs: 1,
        };
        assert_eq!(timeout.process_exit_code(), 1);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ExportError = toml_err.into();
        assert!(matches!(err, ExportError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_export_error_implements_std_error() {
        let err = ExportError::Io("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
