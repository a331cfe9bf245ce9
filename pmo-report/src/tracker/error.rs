//! Tracker query error types.

use thiserror::Error;

/// Errors that can occur while querying the issue tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Transport-level failure.
    #[error("Tracker request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The tracker answered with a non-success status.
    #[error("Tracker returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed tracker response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The search endpoint URL could not be built.
    #[error("Invalid tracker URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
