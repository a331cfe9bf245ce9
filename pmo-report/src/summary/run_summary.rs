//! Run summary types.

use super::FetchOutcome;
use crate::date_range::{DateRange, ReportMode};
use crate::delivery::DeliveryStatus;
use chrono::NaiveDate;

/// Summary of a complete run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Report mode.
    pub mode: ReportMode,

    /// First day covered.
    pub start: NaiveDate,

    /// Last day covered.
    pub end: NaiveDate,

    /// Tracker query outcome.
    pub fetch: FetchOutcome,

    /// Chat delivery outcome.
    pub chat: DeliveryStatus,

    /// Email delivery outcome.
    pub email: DeliveryStatus,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a summary for a run over `range`, with nothing attempted yet.
    #[must_use]
    pub fn new(mode: ReportMode, range: &DateRange, dry_run: bool) -> Self {
        Self {
            mode,
            start: range.start,
            end: range.end,
            fetch: FetchOutcome::Pending,
            chat: DeliveryStatus::Pending,
            email: DeliveryStatus::Pending,
            dry_run,
        }
    }

    /// Number of issues included in the report.
    #[must_use]
    pub fn issues_found(&self) -> usize {
        match self.fetch {
            FetchOutcome::Fetched { count } => count,
            FetchOutcome::Pending | FetchOutcome::Failed { .. } => 0,
        }
    }

    /// Returns true if the fetch or a delivery failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        matches!(self.fetch, FetchOutcome::Failed { .. })
            || matches!(self.chat, DeliveryStatus::Failed { .. })
            || matches!(self.email, DeliveryStatus::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            title: String::new(),
        }
    }

    #[test]
    fn deliveries_start_pending() {
        let summary = RunSummary::new(ReportMode::Daily, &range(), false);
        assert_eq!(summary.chat, DeliveryStatus::Pending);
        assert_eq!(summary.email, DeliveryStatus::Pending);
        assert_eq!(summary.fetch, FetchOutcome::Pending);
    }

    #[test]
    fn failed_fetch_counts_as_zero_issues() {
        let mut summary = RunSummary::new(ReportMode::Daily, &range(), false);
        summary.fetch = FetchOutcome::Failed {
            error: "timeout".to_string(),
        };
        summary.chat = DeliveryStatus::Sent;

        assert_eq!(summary.issues_found(), 0);
        assert!(summary.has_failures());
    }

    #[test]
    fn skipped_email_is_not_a_failure() {
        let mut summary = RunSummary::new(ReportMode::Weekly, &range(), false);
        summary.fetch = FetchOutcome::Fetched { count: 3 };
        summary.chat = DeliveryStatus::Sent;

        assert_eq!(summary.issues_found(), 3);
        assert!(!summary.has_failures());
    }
}
