//! Domain models and types for sulu-export.
//!
//! This module contains the small set of value types shared across the crate:
//! the export stage labels, the error taxonomy, the `Result` alias, and the
//! fixed artifact constants consumed by the orchestrator.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ExportError>`]:
//!
//! ```rust
//! use sulu_export::domain::{ExportError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(ExportError::Configuration("missing export directory".to_string()))
//! }
//! ```

pub mod constants;
pub mod errors;
pub mod result;
pub mod stage;

// Re-export commonly used types for convenience
pub use errors::ExportError;
pub use result::Result;
pub use stage::ExportStage;
