//! JQL construction.

use crate::date_range::DateRange;
use chrono::Days;

/// Maximum number of issues requested in a single search.
pub const MAX_RESULTS: u32 = 100;

/// Fields requested for every issue.
pub const SEARCH_FIELDS: &str = "summary,status,assignee,priority,created,updated";

/// Builds the JQL selecting issues updated within `range`, newest first.
///
/// Jira compares `updated` against midnight of a bare date, so the upper
/// bound is the day after `range.end` (exclusive).
#[must_use]
pub fn build_jql(range: &DateRange) -> String {
    let end_exclusive = range
        .end
        .checked_add_days(Days::new(1))
        .unwrap_or(range.end);
    format!(
        "updated >= \"{}\" AND updated < \"{}\" ORDER BY updated DESC",
        range.start.format("%Y-%m-%d"),
        end_exclusive.format("%Y-%m-%d"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn daily_query_covers_whole_day() {
        let range = DateRange {
            start: date("2024-03-05"),
            end: date("2024-03-05"),
            title: String::new(),
        };
        assert_eq!(
            build_jql(&range),
            r#"updated >= "2024-03-05" AND updated < "2024-03-06" ORDER BY updated DESC"#
        );
    }

    #[test]
    fn weekly_query_crosses_month_boundary() {
        let range = DateRange {
            start: date("2024-02-24"),
            end: date("2024-02-29"),
            title: String::new(),
        };
        assert_eq!(
            build_jql(&range),
            r#"updated >= "2024-02-24" AND updated < "2024-03-01" ORDER BY updated DESC"#
        );
    }
}
