//! Export orchestrator - runs the three stages in fixed order
//!
//! The orchestrator sequences the repository export, the database dump, and
//! the uploads archive, reporting progress after each completed stage and
//! aborting the whole run on the first failure. Stages are independent; the
//! ordering is fixed for reproducibility and operator expectation.
//!
//! Partial artifacts of a failed run are deliberately left on disk to aid
//! diagnosis; nothing is rolled back. Two simultaneous runs against the same
//! export directory will corrupt each other's output, so callers must ensure
//! a single invocation at a time.

use crate::adapters::repository::{ConsoleRepositoryExporter, RepositoryExporter};
use crate::config::{DatabaseConfig, ExportToolConfig};
use crate::core::export::progress::ProgressReporter;
use crate::core::export::run::{ExportReport, ExportRun};
use crate::core::process::run_stage_process;
use crate::domain::{constants, ExportError, ExportStage, Result};
use secrecy::ExposeSecret;
use std::path::Path;
use std::time::{Duration, Instant};

/// Orchestrates one export run.
pub struct ExportOrchestrator {
    config: ExportToolConfig,
    repository_exporter: Box<dyn RepositoryExporter>,
    progress_enabled: bool,
}

impl ExportOrchestrator {
    /// Create an orchestrator with the production repository exporter.
    pub fn new(config: ExportToolConfig) -> Self {
        let exporter = ConsoleRepositoryExporter::new(config.repository.console_path.clone());
        Self {
            config,
            repository_exporter: Box::new(exporter),
            progress_enabled: true,
        }
    }

    /// Create an orchestrator with a custom repository exporter.
    ///
    /// The repository stage runs through this seam so its failure always
    /// propagates as a `Result`; tests substitute a mock here.
    pub fn with_repository_exporter(
        config: ExportToolConfig,
        exporter: Box<dyn RepositoryExporter>,
    ) -> Self {
        Self {
            config,
            repository_exporter: exporter,
            progress_enabled: true,
        }
    }

    /// Disable the progress bar (tests, non-interactive runs).
    pub fn without_progress(mut self) -> Self {
        self.progress_enabled = false;
        self
    }

    /// Run the three export stages in order.
    ///
    /// On success all three artifacts exist in the export directory under
    /// their fixed names and the returned report lists them in order of
    /// creation. On failure the run aborts at the failing stage; later
    /// stages never start.
    pub async fn run(&self) -> Result<ExportReport> {
        let started = Instant::now();

        self.preflight()?;

        let progress = ProgressReporter::new(self.progress_enabled);
        let mut run = ExportRun::new();

        tracing::info!(
            export_directory = %self.config.export.directory.display(),
            "Starting export run"
        );

        match self.run_stages(&mut run, &progress).await {
            Ok(report) => {
                progress.finish();
                tracing::info!(
                    stages = run.completed_stages(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    "Export completed"
                );
                Ok(ExportReport {
                    duration: started.elapsed(),
                    ..report
                })
            }
            Err(err) => {
                if let Some(stage) = err.stage() {
                    run.fail(stage);
                }
                progress.abandon();
                tracing::error!(
                    error = %err,
                    completed_stages = run.completed_stages(),
                    "Export aborted"
                );
                Err(err)
            }
        }
    }

    /// Validate the filesystem preconditions before any stage runs.
    ///
    /// The export directory is created when missing; a missing uploads
    /// directory aborts the run before any artifact is written.
    fn preflight(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config.export.directory).map_err(|e| {
            ExportError::Configuration(format!(
                "Cannot create export directory {}: {}",
                self.config.export.directory.display(),
                e
            ))
        })?;

        let uploads_dir = self.config.export.effective_uploads_directory();
        if !uploads_dir.is_dir() {
            return Err(ExportError::Configuration(format!(
                "Uploads directory {} does not exist",
                uploads_dir.display()
            )));
        }

        Ok(())
    }

    async fn run_stages(
        &self,
        run: &mut ExportRun,
        progress: &ProgressReporter,
    ) -> Result<ExportReport> {
        let export_dir = &self.config.export.directory;
        let phpcr_file = export_dir.join(constants::FILENAME_PHPCR);
        let sql_file = export_dir.join(constants::FILENAME_SQL);
        let uploads_file = export_dir.join(constants::FILENAME_UPLOADS);

        // Stage 1: repository export, via the trait seam
        run.begin_stage(ExportStage::Repository);
        progress.stage_started(ExportStage::Repository);
        tracing::info!(stage = %ExportStage::Repository, "Starting stage");
        self.repository_exporter
            .export(&self.config.repository.root_path, &phpcr_file)
            .await?;
        run.finish_stage(ExportStage::Repository);
        progress.stage_completed();

        // Stage 2: database dump, stdout redirected to the SQL artifact
        run.begin_stage(ExportStage::Database);
        progress.stage_started(ExportStage::Database);
        tracing::info!(stage = %ExportStage::Database, "Starting stage");
        let result = run_stage_process(
            ExportStage::Database,
            &self.config.database.mysqldump_path,
            &mysqldump_args(&self.config.database),
            Some(&sql_file),
            None,
        )
        .await?;
        if !result.success() {
            return Err(result.into_failure());
        }
        run.finish_stage(ExportStage::Database);
        progress.stage_completed();

        // Stage 3: uploads archive, with timeout
        run.begin_stage(ExportStage::Uploads);
        progress.stage_started(ExportStage::Uploads);
        tracing::info!(stage = %ExportStage::Uploads, "Starting stage");
        let uploads_dir = self.config.export.effective_uploads_directory();
        let result = run_stage_process(
            ExportStage::Uploads,
            &self.config.export.tar_path,
            &tar_args(&uploads_file, &uploads_dir),
            None,
            Some(Duration::from_secs(self.config.export.uploads_timeout_secs)),
        )
        .await?;
        if !result.success() {
            return Err(result.into_failure());
        }
        run.finish_stage(ExportStage::Uploads);
        progress.stage_completed();

        Ok(ExportReport {
            phpcr_file,
            sql_file,
            uploads_file,
            duration: Duration::default(),
        })
    }
}

/// Argument vector for the database dump invocation.
///
/// An empty password omits the password flag entirely; a non-empty one is
/// passed as the fused `-p<password>` argument the dump tool expects.
fn mysqldump_args(db: &DatabaseConfig) -> Vec<String> {
    let mut args = vec![
        "-h".to_string(),
        db.host.clone(),
        "-u".to_string(),
        db.user.clone(),
    ];
    if db.has_password() {
        args.push(format!("-p{}", db.password.expose_secret().as_ref()));
    }
    args.push(db.name.clone());
    args
}

/// Argument vector for the uploads archive invocation.
fn tar_args(archive_file: &Path, uploads_dir: &Path) -> Vec<String> {
    vec![
        "cf".to_string(),
        archive_file.to_string_lossy().into_owned(),
        uploads_dir.to_string_lossy().into_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn database_config(password: &str) -> DatabaseConfig {
        DatabaseConfig {
            host: "db.example.com".to_string(),
            user: "sulu".to_string(),
            password: secret_string(password.to_string()),
            name: "sulu_cms".to_string(),
            mysqldump_path: "mysqldump".to_string(),
        }
    }

    #[test]
    fn test_mysqldump_args_with_password() {
        let args = mysqldump_args(&database_config("s3cret"));
        assert_eq!(
            args,
            vec!["-h", "db.example.com", "-u", "sulu", "-ps3cret", "sulu_cms"]
        );
    }

    #[test]
    fn test_mysqldump_args_empty_password_omits_flag() {
        let args = mysqldump_args(&database_config(""));
        assert_eq!(args, vec!["-h", "db.example.com", "-u", "sulu", "sulu_cms"]);
        assert!(!args.iter().any(|a| a.starts_with("-p")));
    }

    #[test]
    fn test_tar_args() {
        let args = tar_args(
            Path::new("var/export/uploads.tar"),
            Path::new("var/uploads"),
        );
        assert_eq!(args, vec!["cf", "var/export/uploads.tar", "var/uploads"]);
    }

    #[test]
    fn test_preflight_rejects_missing_uploads_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config: ExportToolConfig = toml::from_str(&format!(
            r#"
            [database]
            user = "sulu"
            name = "sulu"

            [export]
            directory = "{}"
            uploads_directory = "{}"
            "#,
            dir.path().join("export").display(),
            dir.path().join("missing-uploads").display(),
        ))
        .unwrap();

        let orchestrator = ExportOrchestrator::new(config).without_progress();
        let err = orchestrator.preflight().unwrap_err();
        assert!(matches!(err, ExportError::Configuration(_)));
        assert!(err.to_string().contains("Uploads directory"));
    }

    #[test]
    fn test_preflight_creates_export_directory() {
        let dir = tempfile::tempdir().unwrap();
        let export_dir = dir.path().join("export");
        let uploads_dir = dir.path().join("uploads");
        std::fs::create_dir(&uploads_dir).unwrap();

        let config: ExportToolConfig = toml::from_str(&format!(
            r#"
            [database]
            user = "sulu"
            name = "sulu"

            [export]
            directory = "{}"
            uploads_directory = "{}"
            "#,
            export_dir.display(),
            uploads_dir.display(),
        ))
        .unwrap();

        let orchestrator = ExportOrchestrator::new(config).without_progress();
        orchestrator.preflight().unwrap();
        assert!(export_dir.is_dir());
    }
}
