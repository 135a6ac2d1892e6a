//! Core business logic for sulu-export.
//!
//! This module contains the export orchestration and the external process
//! runner it is built on.
//!
//! # Modules
//!
//! - [`export`] - Stage sequencing, run state, progress reporting
//! - [`process`] - Argument-vector subprocess invocation with timeout

pub mod export;
pub mod process;

pub use export::{ExportOrchestrator, ExportReport};
pub use process::StageResult;
