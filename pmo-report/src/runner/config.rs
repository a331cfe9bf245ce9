//! Runner configuration.

use crate::config::ReportConfig;
use crate::date_range::ReportMode;
use chrono::NaiveDateTime;

/// Configuration for a single report run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Validated report settings.
    report: ReportConfig,
    /// Report window selection.
    mode: ReportMode,
    /// Whether to print the report instead of delivering it.
    dry_run: bool,
    /// Fixed local time to resolve the window against; `None` uses the clock.
    now: Option<NaiveDateTime>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    #[must_use]
    pub fn new(report: ReportConfig, mode: ReportMode) -> Self {
        Self {
            report,
            mode,
            dry_run: false,
            now: None,
        }
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Pins the local time the report window is resolved against.
    #[must_use]
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    /// Returns the report settings.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Returns the report mode.
    pub fn mode(&self) -> ReportMode {
        self.mode
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the pinned local time, if any.
    pub fn now(&self) -> Option<NaiveDateTime> {
        self.now
    }
}
