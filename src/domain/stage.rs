//! Export stage labels
//!
//! The three stages run in a fixed order: repository, database, uploads.
//! The ordering is a policy choice kept stable for reproducibility and
//! operator expectation, not a data dependency.

use serde::{Deserialize, Serialize};

/// One of the three independent export stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStage {
    /// PHPCR content repository export
    Repository,
    /// Relational database dump
    Database,
    /// Uploads directory archive
    Uploads,
}

impl ExportStage {
    /// All stages in execution order.
    pub const ALL: [ExportStage; 3] = [
        ExportStage::Repository,
        ExportStage::Database,
        ExportStage::Uploads,
    ];

    /// Total number of stages, used as the progress bar length.
    pub const COUNT: u64 = 3;

    /// Stable lowercase name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ExportStage::Repository => "repository",
            ExportStage::Database => "database",
            ExportStage::Uploads => "uploads",
        }
    }

    /// Human-readable progress message shown while the stage runs.
    pub fn progress_message(&self) -> &'static str {
        match self {
            ExportStage::Repository => "Exporting PHPCR repository...",
            ExportStage::Database => "Exporting database...",
            ExportStage::Uploads => "Exporting uploads...",
        }
    }
}

impl std::fmt::Display for ExportStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_is_fixed() {
        assert_eq!(
            ExportStage::ALL,
            [
                ExportStage::Repository,
                ExportStage::Database,
                ExportStage::Uploads
            ]
        );
        assert_eq!(ExportStage::ALL.len() as u64, ExportStage::COUNT);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(ExportStage::Repository.to_string(), "repository");
        assert_eq!(ExportStage::Database.to_string(), "database");
        assert_eq!(ExportStage::Uploads.to_string(), "uploads");
    }
}
