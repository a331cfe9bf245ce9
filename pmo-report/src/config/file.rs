//! Optional TOML configuration file.

use crate::config::{ConfigError, StatusEmojis};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Parsed contents of the optional report config file.
///
/// ```toml
/// fallback-emoji = "❔"
///
/// [status-emoji]
/// "In Review" = "👀"
/// "Done" = "🎉"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Extra or replacement status emojis.
    #[serde(default)]
    pub status_emoji: HashMap<String, String>,

    /// Marker for statuses missing from the table.
    pub fallback_emoji: Option<String>,
}

impl ConfigFile {
    /// Loads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read or isn't valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Applies the file's emoji settings on top of the built-in table.
    #[must_use]
    pub fn status_emojis(self) -> StatusEmojis {
        let mut emojis = StatusEmojis::default();
        emojis.extend(self.status_emoji, self.fallback_emoji);
        emojis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn can_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.toml");
        fs::write(
            &path,
            r#"
fallback-emoji = "❔"

[status-emoji]
"In Review" = "👀"
"#,
        )
        .unwrap();

        let emojis = ConfigFile::load(&path).unwrap().status_emojis();
        assert_eq!(emojis.lookup("In Review"), "👀");
        assert_eq!(emojis.lookup("Backlog"), "❔");
        assert_eq!(emojis.lookup("Done"), "✅");
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.toml");
        fs::write(&path, "webhook = \"https://example.com\"\n").unwrap();

        let result = ConfigFile::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = ConfigFile::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
