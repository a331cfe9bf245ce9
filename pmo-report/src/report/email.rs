//! Email subject and bodies for the report.

use super::{assignee_label, EMAIL_LISTING_LIMIT};
use crate::config::ReportConfig;
use crate::date_range::DateRange;
use crate::templates::{TemplateError, TemplateRenderer};
use crate::tracker::Issue;
use serde::Serialize;

/// A rendered email, sent as multipart/alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailBody {
    pub subject: String,
    pub plain: String,
    pub html: String,
}

#[derive(Serialize)]
struct EmailContext<'a> {
    title: &'a str,
    start: String,
    end: String,
    total: usize,
    remaining: usize,
    issues: Vec<EmailIssue<'a>>,
}

#[derive(Serialize)]
struct EmailIssue<'a> {
    key: &'a str,
    summary: &'a str,
    status: &'a str,
    assignee: &'a str,
    url: String,
}

/// Renders the email for `issues` updated within `range`.
///
/// # Errors
///
/// Returns [`TemplateError`] if a template fails to render.
pub fn format_email(
    renderer: &TemplateRenderer,
    issues: &[Issue],
    range: &DateRange,
    config: &ReportConfig,
) -> Result<EmailBody, TemplateError> {
    let listed: Vec<EmailIssue<'_>> = issues
        .iter()
        .take(EMAIL_LISTING_LIMIT)
        .map(|issue| EmailIssue {
            key: &issue.key,
            summary: &issue.summary,
            status: &issue.status,
            assignee: assignee_label(issue),
            url: config.browse_url(&issue.key),
        })
        .collect();

    let context = EmailContext {
        title: &range.title,
        start: range.start.to_string(),
        end: range.end.to_string(),
        total: issues.len(),
        remaining: issues.len() - listed.len(),
        issues: listed,
    };

    Ok(EmailBody {
        subject: range.title.clone(),
        plain: renderer.render_plain(&context)?,
        html: renderer.render_html(&context)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::{config, issue, numbered_issues, weekly_range};

    fn render(issues: &[Issue]) -> EmailBody {
        let renderer = TemplateRenderer::new().unwrap();
        format_email(&renderer, issues, &weekly_range(), &config()).unwrap()
    }

    #[test]
    fn empty_report_states_none_found() {
        let email = render(&[]);

        assert_eq!(email.subject, "📅 Weekly PMO Report");
        assert!(email.plain.contains("Period: 2024-02-27 to 2024-03-05"));
        assert!(email.plain.contains("Total issues updated: 0"));
        assert!(email.plain.contains("No issues were updated in this period."));
        assert!(email.html.contains("No issues were updated in this period."));
    }

    #[test]
    fn lists_at_most_ten_issues() {
        let email = render(&numbered_issues(12));

        let entries = email.plain.lines().filter(|line| line.starts_with("- PMO-")).count();
        assert_eq!(entries, 10);
        assert!(email.plain.contains("- PMO-10: "));
        assert!(!email.plain.contains("- PMO-11: "));
        assert!(email.plain.contains("... and 2 more"));
        assert_eq!(email.html.matches("<tr><td>").count(), 10);
    }

    #[test]
    fn entry_has_status_assignee_and_url() {
        let email = render(&[issue("PMO-3", "Blocked", None)]);

        assert!(email.plain.contains("- PMO-3: Summary of PMO-3"));
        assert!(email.plain.contains("Status: Blocked | Assignee: Unassigned"));
        assert!(email.plain.contains("https://acme.atlassian.net/browse/PMO-3"));
        assert!(!email.plain.contains("more"));
        assert!(!email.plain.contains("No issues were updated"));
    }
}
