//! Runner error types.

/// Errors that prevent a run from starting.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// HTTP client initialization errors.
    #[error("Failed to initialize HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// Tracker client setup errors.
    #[error(transparent)]
    Tracker(#[from] crate::tracker::TrackerError),

    /// Built-in template errors.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),
}
