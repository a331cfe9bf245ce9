//! Date window resolution.

mod mode;

pub use mode::ReportMode;

use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};

/// Title used for weekly reports.
pub const WEEKLY_TITLE: &str = "📅 Weekly PMO Report";
/// Title used for daily reports generated before noon.
pub const MORNING_TITLE: &str = "☀️ Daily PMO Dashboard - Morning";
/// Title used for daily reports generated from noon onwards.
pub const AFTERNOON_TITLE: &str = "🌆 Daily PMO Dashboard - Afternoon";

/// Number of days covered by a weekly report, counting back from today.
const WEEKLY_SPAN_DAYS: u64 = 7;

/// Inclusive window of calendar dates a report covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window, inclusive.
    pub end: NaiveDate,
    /// Report title.
    pub title: String,
}

/// Resolves the report window for `mode` at local time `now`.
#[must_use]
pub fn resolve(mode: ReportMode, now: NaiveDateTime) -> DateRange {
    let today = now.date();
    match mode {
        ReportMode::Weekly => DateRange {
            start: today
                .checked_sub_days(Days::new(WEEKLY_SPAN_DAYS))
                .unwrap_or(NaiveDate::MIN),
            end: today,
            title: WEEKLY_TITLE.to_string(),
        },
        ReportMode::Daily => {
            let title = if now.hour() < 12 {
                MORNING_TITLE
            } else {
                AFTERNOON_TITLE
            };
            DateRange {
                start: today,
                end: today,
                title: title.to_string(),
            }
        }
    }
}
