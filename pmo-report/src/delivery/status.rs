//! Delivery outcome types.

use super::DeliveryError;
use serde::Serialize;
use std::fmt;

/// Outcome of one delivery attempt. Only [`DeliveryStatus::Sent`] counts as
/// success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Not attempted yet.
    Pending,

    /// Delivered.
    Sent,

    /// Not attempted.
    Skipped {
        /// Reason for skipping.
        reason: String,
    },

    /// Attempted and failed.
    Failed {
        /// Error message.
        error: String,
    },
}

impl DeliveryStatus {
    /// Returns true if the report was delivered.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Returns the status as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }
}

impl From<Result<(), DeliveryError>> for DeliveryStatus {
    fn from(result: Result<(), DeliveryError>) -> Self {
        match result {
            Ok(()) => Self::Sent,
            Err(e @ DeliveryError::NotConfigured { .. }) => Self::Skipped {
                reason: e.to_string(),
            },
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Sent => f.write_str("sent"),
            Self::Skipped { reason } => write!(f, "skipped ({reason})"),
            Self::Failed { error } => write!(f, "failed ({error})"),
        }
    }
}
