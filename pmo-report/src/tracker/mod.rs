//! Issue tracker (Jira) search.
//!
//! A single authenticated search for issues updated inside the report
//! window. There is no pagination and no retry; callers decide how to treat
//! a failed fetch.

mod error;
mod issue;
mod query;

pub use error::TrackerError;
pub use issue::Issue;
pub use query::{build_jql, MAX_RESULTS, SEARCH_FIELDS};

use crate::config::ReportConfig;
use crate::date_range::DateRange;
use reqwest::header::ACCEPT;
use tracing::{debug, info, info_span, Instrument};
use url::Url;

/// Search endpoint, relative to the tracker base URL.
const SEARCH_PATH: &str = "rest/api/3/search";

/// Client for the tracker's REST search API.
#[derive(Clone)]
pub struct TrackerClient {
    http: reqwest::Client,
    search_url: Url,
    email: String,
    api_token: String,
}

impl TrackerClient {
    /// Creates a client for the tracker configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidUrl`] if the search URL can't be built.
    pub fn new(http: reqwest::Client, config: &ReportConfig) -> Result<Self, TrackerError> {
        Ok(Self {
            http,
            search_url: config.tracker_url().join(SEARCH_PATH)?,
            email: config.jira_email().to_string(),
            api_token: config.jira_api_token().to_string(),
        })
    }

    /// Fetches up to [`MAX_RESULTS`] issues updated within `range`, most
    /// recently updated first.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] on transport failures, non-2xx responses and
    /// bodies that don't decode into issues.
    pub async fn search_updated(&self, range: &DateRange) -> Result<Vec<Issue>, TrackerError> {
        let jql = build_jql(range);
        let span = info_span!("search_issues", start = %range.start, end = %range.end);

        async {
            debug!(jql = %jql, "Querying tracker");
            let max_results = MAX_RESULTS.to_string();

            let response = self
                .http
                .get(self.search_url.clone())
                .basic_auth(&self.email, Some(&self.api_token))
                .header(ACCEPT, "application/json")
                .query(&[
                    ("jql", jql.as_str()),
                    ("maxResults", max_results.as_str()),
                    ("fields", SEARCH_FIELDS),
                ])
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;
            if !status.is_success() {
                return Err(TrackerError::Status { status, body });
            }

            let issues =
                issue::decode_search_response(&body).map_err(TrackerError::MalformedResponse)?;
            info!(count = issues.len(), "Fetched issues");
            Ok(issues)
        }
        .instrument(span)
        .await
    }
}
