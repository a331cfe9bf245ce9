//! Issue records decoded from the tracker's search response.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// Timestamp format used by Jira, e.g. `2024-01-15T10:30:00.000+0000`.
const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// An issue updated within the report window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue key, e.g. `PMO-42`.
    pub key: String,
    /// One-line summary.
    pub summary: String,
    /// Workflow status name, as labelled by the tracker.
    pub status: String,
    /// Assignee display name, if the issue is assigned.
    pub assignee: Option<String>,
    /// Priority name, if the project uses priorities.
    pub priority: Option<String>,
    /// Creation time.
    pub created: Option<DateTime<FixedOffset>>,
    /// Last update time.
    pub updated: Option<DateTime<FixedOffset>>,
}

/// Body of `GET /rest/api/3/search`. Only `issues` is used.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawIssue {
    key: String,
    fields: RawFields,
}

#[derive(Debug, Deserialize)]
struct RawFields {
    summary: String,
    status: Named,
    assignee: Option<RawUser>,
    priority: Option<Named>,
    #[serde(default, deserialize_with = "jira_timestamp")]
    created: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "jira_timestamp")]
    updated: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    display_name: String,
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        let RawIssue { key, fields } = raw;
        Self {
            key,
            summary: fields.summary,
            status: fields.status.name,
            assignee: fields.assignee.map(|user| user.display_name),
            priority: fields.priority.map(|priority| priority.name),
            created: fields.created,
            updated: fields.updated,
        }
    }
}

fn jira_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    DateTime::parse_from_str(&raw, JIRA_TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(&raw))
        .map(Some)
        .map_err(serde::de::Error::custom)
}

/// Decodes a search response body into issues, keeping the tracker's order.
pub(crate) fn decode_search_response(body: &str) -> Result<Vec<Issue>, serde_json::Error> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.issues.into_iter().map(Issue::from).collect())
}
