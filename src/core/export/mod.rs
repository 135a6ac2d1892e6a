//! Export orchestration
//!
//! This module provides the core export logic for sulu-export:
//! - Stage sequencing and failure propagation (the orchestrator)
//! - Per-invocation run state and the final report
//! - Progress reporting

pub mod orchestrator;
pub mod progress;
pub mod run;

pub use orchestrator::ExportOrchestrator;
pub use progress::ProgressReporter;
pub use run::{ExportReport, ExportRun, RunState};
