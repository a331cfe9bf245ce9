//! Report formatting for chat and email.

mod chat;
mod email;

pub use chat::{format_chat_message, Block, ChatMessage, Text};
pub use email::{format_email, EmailBody};

use crate::tracker::Issue;

/// Maximum number of issues listed in a chat message.
pub const CHAT_LISTING_LIMIT: usize = 5;

/// Maximum number of issues listed in an email.
pub const EMAIL_LISTING_LIMIT: usize = 10;

/// Placeholder shown for issues without an assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// Counts issues per status, in the order each status first appears.
#[must_use]
pub fn status_counts(issues: &[Issue]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for issue in issues {
        match counts.iter_mut().find(|(status, _)| *status == issue.status) {
            Some((_, count)) => *count += 1,
            None => counts.push((issue.status.as_str(), 1)),
        }
    }
    counts
}

/// Returns the assignee's display name or [`UNASSIGNED`].
#[must_use]
pub fn assignee_label(issue: &Issue) -> &str {
    issue
        .assignee
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(UNASSIGNED)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::{ConfigInputs, ReportConfig};
    use crate::date_range::DateRange;
    use crate::tracker::Issue;
    use chrono::NaiveDate;

    pub fn issue(key: &str, status: &str, assignee: Option<&str>) -> Issue {
        Issue {
            key: key.to_string(),
            summary: format!("Summary of {key}"),
            status: status.to_string(),
            assignee: assignee.map(str::to_string),
            priority: None,
            created: None,
            updated: None,
        }
    }

    pub fn numbered_issues(count: usize) -> Vec<Issue> {
        (1..=count)
            .map(|n| issue(&format!("PMO-{n}"), "To Do", Some("Ana")))
            .collect()
    }

    pub fn weekly_range() -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            title: "📅 Weekly PMO Report".to_string(),
        }
    }

    pub fn config() -> ReportConfig {
        ReportConfig::resolve(ConfigInputs {
            jira_email: Some("pmo@example.com".to_string()),
            jira_api_token: Some("token".to_string()),
            slack_webhook_url: Some("https://hooks.example.com/T/B/X".to_string()),
            jira_domain: Some("acme.atlassian.net".to_string()),
            ..Default::default()
        })
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::issue;
    use super::*;

    #[test]
    fn status_counts_keep_first_seen_order() {
        let issues = vec![
            issue("A-1", "Done", None),
            issue("A-2", "To Do", None),
            issue("A-3", "Done", None),
            issue("A-4", "In Review", None),
        ];
        assert_eq!(
            status_counts(&issues),
            vec![("Done", 2), ("To Do", 1), ("In Review", 1)]
        );
    }

    #[test]
    fn missing_or_blank_assignee_is_unassigned() {
        assert_eq!(assignee_label(&issue("A-1", "Done", None)), UNASSIGNED);
        assert_eq!(assignee_label(&issue("A-2", "Done", Some(""))), UNASSIGNED);
        assert_eq!(assignee_label(&issue("A-3", "Done", Some("Ana"))), "Ana");
    }
}
