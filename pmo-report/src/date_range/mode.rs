//! Report mode selection.

use std::fmt;
use tracing::warn;

/// Which window a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Issues updated today.
    #[default]
    Daily,
    /// Issues updated during the last seven days.
    Weekly,
}

impl ReportMode {
    /// Parses a `--mode` value.
    ///
    /// Unrecognised values fall back to [`ReportMode::Daily`] with a warning,
    /// so a scheduled job with a typo still produces a report.
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "daily" => Self::Daily,
            other => {
                warn!(mode = other, "Unknown report mode, using daily");
                Self::Daily
            }
        }
    }

    /// Returns the mode name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
