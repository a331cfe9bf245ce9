//! Status label to emoji lookup used in chat summaries.

use std::collections::HashMap;

/// Marker used for statuses without a configured emoji.
pub const DEFAULT_FALLBACK_EMOJI: &str = "📌";

/// Open lookup table from tracker status names to emoji markers.
///
/// Starts from a built-in set of common Jira statuses and can be extended
/// or overridden from the config file.
#[derive(Debug, Clone)]
pub struct StatusEmojis {
    by_status: HashMap<String, String>,
    fallback: String,
}

impl Default for StatusEmojis {
    fn default() -> Self {
        let by_status = [
            ("To Do", "📄"),
            ("In Progress", "🛠️"),
            ("Done", "✅"),
            ("Blocked", "🚫"),
        ]
        .into_iter()
        .map(|(status, emoji)| (status.to_string(), emoji.to_string()))
        .collect();

        Self {
            by_status,
            fallback: DEFAULT_FALLBACK_EMOJI.to_string(),
        }
    }
}

impl StatusEmojis {
    /// Returns the emoji for a status, or the fallback marker.
    #[must_use]
    pub fn lookup(&self, status: &str) -> &str {
        self.by_status
            .get(status)
            .map_or(self.fallback.as_str(), String::as_str)
    }

    /// Adds or replaces entries, and optionally the fallback marker.
    pub fn extend(&mut self, entries: HashMap<String, String>, fallback: Option<String>) {
        self.by_status.extend(entries);
        if let Some(fallback) = fallback {
            self.fallback = fallback;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_have_emojis() {
        let emojis = StatusEmojis::default();
        assert_eq!(emojis.lookup("To Do"), "📄");
        assert_eq!(emojis.lookup("In Progress"), "🛠️");
        assert_eq!(emojis.lookup("Done"), "✅");
        assert_eq!(emojis.lookup("Blocked"), "🚫");
    }

    #[test]
    fn unknown_status_uses_fallback() {
        let emojis = StatusEmojis::default();
        assert_eq!(emojis.lookup("In Review"), DEFAULT_FALLBACK_EMOJI);
        // Lookup is exact, tracker labels are passed through verbatim.
        assert_eq!(emojis.lookup("done"), DEFAULT_FALLBACK_EMOJI);
    }

    #[test]
    fn extend_overrides_and_adds() {
        let mut emojis = StatusEmojis::default();
        emojis.extend(
            HashMap::from([
                ("Done".to_string(), "🎉".to_string()),
                ("In Review".to_string(), "👀".to_string()),
            ]),
            Some("❔".to_string()),
        );
        assert_eq!(emojis.lookup("Done"), "🎉");
        assert_eq!(emojis.lookup("In Review"), "👀");
        assert_eq!(emojis.lookup("Cancelled"), "❔");
        assert_eq!(emojis.lookup("Blocked"), "🚫");
    }
}
