//! Delivery error types.

use thiserror::Error;

/// Errors that can occur while delivering a report.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Webhook transport failure.
    #[error("Webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("Webhook returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Email settings are incomplete.
    #[error("Email not configured: missing {}", .missing.join(", "))]
    NotConfigured { missing: Vec<&'static str> },

    /// A sender or recipient address is invalid.
    #[error("Invalid email address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    /// The email message could not be assembled.
    #[error("Failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP connection, authentication or transmission failure.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
