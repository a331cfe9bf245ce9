//! Issue fetch outcome.

use serde::Serialize;

/// Result of querying the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// Not run yet.
    Pending,

    /// Query succeeded.
    Fetched {
        /// Number of issues returned.
        count: usize,
    },

    /// Query failed; the report was built from zero issues.
    Failed {
        /// Error message.
        error: String,
    },
}
