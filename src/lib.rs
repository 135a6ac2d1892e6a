// sulu-export - Sulu CMS content export tool
// Licensed under the MIT License

//! # sulu-export - Sulu CMS content export
//!
//! sulu-export snapshots the three independent data stores of a Sulu
//! installation — the PHPCR content repository, the relational database, and
//! the uploads directory — into a single export directory. The artifacts are
//! consumed by the companion import tool.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export orchestration and subprocess handling
//! - [`adapters`] - The repository-export seam
//! - [`domain`] - Stage labels, errors, artifact constants
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sulu_export::config::load_config;
//! use sulu_export::core::export::ExportOrchestrator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("sulu-export.toml")?;
//!
//!     let orchestrator = ExportOrchestrator::new(config);
//!     let report = orchestrator.run().await?;
//!
//!     for artifact in report.artifacts() {
//!         println!("wrote {}", artifact.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Orchestration contract
//!
//! The three stages run strictly in order: repository export, database dump,
//! uploads archive. A stage only starts once the previous stage succeeded;
//! the first failure aborts the run with the stage name and the captured
//! diagnostic. Progress advances exactly once per completed stage and
//! reaches 3/3 only on full success. Partial artifacts of a failed run stay
//! on disk for diagnosis.
//!
//! ## Error Handling
//!
//! All fallible operations use [`domain::ExportError`]:
//!
//! ```rust,no_run
//! use sulu_export::domain::ExportError;
//!
//! fn example() -> Result<(), ExportError> {
//!     let config = sulu_export::config::load_config("sulu-export.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
