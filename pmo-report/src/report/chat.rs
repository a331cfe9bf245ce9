//! Slack Block Kit message for the report.

use super::{assignee_label, status_counts, CHAT_LISTING_LIMIT};
use crate::config::ReportConfig;
use crate::date_range::DateRange;
use crate::tracker::Issue;
use serde::Serialize;

/// A webhook payload made of Block Kit blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub blocks: Vec<Block>,
}

/// A layout block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: Text },
    Section { text: Text },
    Divider,
}

/// A text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl Block {
    fn header(text: impl Into<String>) -> Self {
        Self::Header {
            text: Text::PlainText { text: text.into() },
        }
    }

    fn section(text: impl Into<String>) -> Self {
        Self::Section {
            text: Text::Mrkdwn { text: text.into() },
        }
    }
}

/// Builds the chat message for `issues` updated within `range`.
///
/// The per-status summary and the listing are only present when there are
/// issues. At most [`CHAT_LISTING_LIMIT`] issues are listed, in the order
/// given.
#[must_use]
pub fn format_chat_message(
    issues: &[Issue],
    range: &DateRange,
    config: &ReportConfig,
) -> ChatMessage {
    let mut blocks = vec![
        Block::header(range.title.as_str()),
        Block::section(format!(
            "*Period:* {} to {}\n*Total issues updated:* {}",
            range.start,
            range.end,
            issues.len()
        )),
        Block::Divider,
    ];

    let counts = status_counts(issues);
    if !counts.is_empty() {
        let emojis = config.status_emojis();
        let mut text = String::from("*Summary by status:*\n");
        for (status, count) in counts {
            text.push_str(&format!(
                "{} {}: {count}\n",
                emojis.lookup(status),
                escape_mrkdwn(status)
            ));
        }
        blocks.push(Block::section(text));
    }

    if !issues.is_empty() {
        blocks.push(Block::Divider);
        blocks.push(Block::section("*Latest updated issues:*"));
        blocks.extend(issues.iter().take(CHAT_LISTING_LIMIT).map(|issue| {
            Block::section(format!(
                "*<{}|{}>* - {}\n*Status:* {} | *Assignee:* {}",
                config.browse_url(&issue.key),
                issue.key,
                escape_mrkdwn(&issue.summary),
                escape_mrkdwn(&issue.status),
                escape_mrkdwn(assignee_label(issue)),
            ))
        }));
    }

    ChatMessage { blocks }
}

/// Escapes the three characters Slack treats as control sequences.
fn escape_mrkdwn(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
