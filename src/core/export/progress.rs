//! Progress reporting for the export run
//!
//! One bar with three fixed steps, one per stage. The bar can be disabled
//! for tests and non-interactive invocations; all methods are then no-ops.

use crate::domain::ExportStage;
use indicatif::{ProgressBar, ProgressStyle};

/// Three-step progress reporter for an export run.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; `enabled = false` yields a silent reporter.
    pub fn new(enabled: bool) -> Self {
        let bar = if enabled {
            let bar = ProgressBar::new(ExportStage::COUNT);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{pos}/{len} [{bar:40.cyan/blue}] {percent:>3}% {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(bar)
        } else {
            None
        };
        Self { bar }
    }

    /// Show the stage's message while it runs.
    pub fn stage_started(&self, stage: ExportStage) {
        if let Some(ref bar) = self.bar {
            bar.set_message(stage.progress_message());
        }
    }

    /// Advance the bar by one completed stage.
    pub fn stage_completed(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Finish the bar and print the completion notice.
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("Successfully exported contents.");
        }
    }

    /// Leave the bar where it is after a failed run.
    pub fn abandon(&self) {
        if let Some(ref bar) = self.bar {
            bar.abandon();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_reporter_is_noop() {
        let reporter = ProgressReporter::new(false);
        reporter.stage_started(ExportStage::Repository);
        reporter.stage_completed();
        reporter.finish();
        // No bar, no panic
    }

    #[test]
    fn test_enabled_reporter_advances() {
        let reporter = ProgressReporter::new(true);
        for stage in ExportStage::ALL {
            reporter.stage_started(stage);
            reporter.stage_completed();
        }
        if let Some(ref bar) = reporter.bar {
            assert_eq!(bar.position(), ExportStage::COUNT);
        }
        reporter.finish();
    }
}
