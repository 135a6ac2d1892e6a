//! Repository export seam
//!
//! The PHPCR repository export is owned by the platform console; it is
//! invoked through the [`RepositoryExporter`] trait so the orchestrator gets
//! an explicit `Result` back and can never silently continue past a failed
//! repository export. Tests substitute a mock implementation.

use crate::core::process::run_stage_process;
use crate::domain::{ExportError, ExportStage, Result};
use async_trait::async_trait;
use std::path::Path;

/// Exports the content repository to a file.
#[async_trait]
pub trait RepositoryExporter: Send + Sync {
    /// Export the repository subtree at `root_path` into `output_file`.
    async fn export(&self, root_path: &str, output_file: &Path) -> Result<()>;
}

/// Production exporter delegating to the platform console binary.
///
/// Runs `console doctrine:phpcr:workspace:export -p <root> <output>` with a
/// discrete argument vector.
pub struct ConsoleRepositoryExporter {
    console_path: String,
}

impl ConsoleRepositoryExporter {
    /// Create an exporter for the given console binary path.
    pub fn new(console_path: String) -> Self {
        Self { console_path }
    }
}

#[async_trait]
impl RepositoryExporter for ConsoleRepositoryExporter {
    async fn export(&self, root_path: &str, output_file: &Path) -> Result<()> {
        let args = vec![
            "doctrine:phpcr:workspace:export".to_string(),
            "-p".to_string(),
            root_path.to_string(),
            output_file.to_string_lossy().into_owned(),
        ];

        let result = run_stage_process(
            ExportStage::Repository,
            &self.console_path,
            &args,
            None,
            None,
        )
        .await?;

        if !result.success() {
            return Err(ExportError::Repository(format!(
                "console exited with {}: {}",
                result
                    .exit_code
                    .map_or_else(|| "signal".to_string(), |c| c.to_string()),
                result.stderr.trim()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_exporter_failure_propagates() {
        // `false` stands in for a console whose export sub-command fails
        let exporter = ConsoleRepositoryExporter::new("false".to_string());
        let err = exporter
            .export("/cmf", Path::new("/tmp/export.phpcr.xml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Repository(_)));
    }

    #[tokio::test]
    async fn test_console_exporter_missing_binary_is_io_error() {
        let exporter = ConsoleRepositoryExporter::new("/nonexistent/console".to_string());
        let err = exporter
            .export("/cmf", Path::new("/tmp/export.phpcr.xml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
