//! External collaborator seams for sulu-export.
//!
//! The repository export is an in-process sub-operation of the platform and
//! goes through an explicit trait so its failure always propagates to the
//! orchestrator.

pub mod repository;

pub use repository::{ConsoleRepositoryExporter, RepositoryExporter};
