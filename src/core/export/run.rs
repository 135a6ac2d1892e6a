//! Per-invocation run state and the final report
//!
//! `ExportRun` is an explicit state value threaded through the orchestrator's
//! stage calls rather than a set of shared mutable fields, so a run can be
//! constructed and inspected freely in tests.

use crate::domain::ExportStage;
use std::path::PathBuf;
use std::time::Duration;

/// State machine for one export invocation.
///
/// `Idle -> Running(Repository) -> Running(Database) -> Running(Uploads) -> Done`,
/// with any `Running` state able to transition to `Failed`. Failure is
/// terminal for the run; there are no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No stage has started yet
    Idle,
    /// The given stage is executing
    Running(ExportStage),
    /// All three stages completed
    Done,
    /// The given stage failed; the run is over
    Failed(ExportStage),
}

/// Transient state for one export invocation.
///
/// Created at invocation start, mutated as stages start and finish,
/// discarded once the outcome has been reported.
#[derive(Debug)]
pub struct ExportRun {
    state: RunState,
    completed: u8,
}

impl ExportRun {
    /// Create a run in the idle state with no completed stages.
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
            completed: 0,
        }
    }

    /// Record that a stage has started.
    pub fn begin_stage(&mut self, stage: ExportStage) {
        self.state = RunState::Running(stage);
    }

    /// Record that the current stage completed successfully.
    ///
    /// The progress counter advances exactly once per completed stage.
    pub fn finish_stage(&mut self, stage: ExportStage) {
        debug_assert_eq!(self.state, RunState::Running(stage));
        self.completed += 1;
        if self.completed == ExportStage::COUNT as u8 {
            self.state = RunState::Done;
        }
    }

    /// Record that the given stage failed, ending the run.
    pub fn fail(&mut self, stage: ExportStage) {
        self.state = RunState::Failed(stage);
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Number of stages completed so far (0..=3).
    pub fn completed_stages(&self) -> u8 {
        self.completed
    }

    /// Whether all three stages completed.
    pub fn is_done(&self) -> bool {
        self.state == RunState::Done
    }
}

impl Default for ExportRun {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of a fully successful export run.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Path of the PHPCR repository export artifact
    pub phpcr_file: PathBuf,
    /// Path of the SQL dump artifact
    pub sql_file: PathBuf,
    /// Path of the uploads archive artifact
    pub uploads_file: PathBuf,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl ExportReport {
    /// Artifact paths in order of creation.
    pub fn artifacts(&self) -> [&PathBuf; 3] {
        [&self.phpcr_file, &self.sql_file, &self.uploads_file]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_run_reaches_done() {
        let mut run = ExportRun::new();
        assert_eq!(run.state(), RunState::Idle);

        for stage in ExportStage::ALL {
            run.begin_stage(stage);
            assert_eq!(run.state(), RunState::Running(stage));
            run.finish_stage(stage);
        }

        assert!(run.is_done());
        assert_eq!(run.completed_stages(), 3);
    }

    #[test]
    fn test_progress_advances_once_per_completed_stage() {
        let mut run = ExportRun::new();
        run.begin_stage(ExportStage::Repository);
        assert_eq!(run.completed_stages(), 0);
        run.finish_stage(ExportStage::Repository);
        assert_eq!(run.completed_stages(), 1);
    }

    #[test]
    fn test_failure_is_terminal_and_keeps_counter() {
        let mut run = ExportRun::new();
        run.begin_stage(ExportStage::Repository);
        run.finish_stage(ExportStage::Repository);
        run.begin_stage(ExportStage::Database);
        run.fail(ExportStage::Database);

        assert_eq!(run.state(), RunState::Failed(ExportStage::Database));
        assert_eq!(run.completed_stages(), 1);
        assert!(!run.is_done());
    }

    #[test]
    fn test_report_artifact_order() {
        let report = ExportReport {
            phpcr_file: "e/export.phpcr.xml".into(),
            sql_file: "e/export.sql".into(),
            uploads_file: "e/uploads.tar".into(),
            duration: Duration::from_secs(1),
        };
        let [a, b, c] = report.artifacts();
        assert!(a.ends_with("export.phpcr.xml"));
        assert!(b.ends_with("export.sql"));
        assert!(c.ends_with("uploads.tar"));
    }
}
