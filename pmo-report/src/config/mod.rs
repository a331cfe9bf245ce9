//! Report configuration.
//!
//! Settings are collected once at startup (from the environment, via the CLI)
//! into a [`ReportConfig`] which is then passed by reference to every
//! component. Tracker and chat settings are mandatory; email settings are
//! only checked when an email is sent.

mod email;
mod emojis;
mod error;
mod file;

pub use email::{parse_recipients, EmailAccount, EmailConfig, EmailProvider};
pub use emojis::{StatusEmojis, DEFAULT_FALLBACK_EMOJI};
pub use error::ConfigError;
pub use file::ConfigFile;

use email::non_empty;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

/// Jira Cloud site queried when `JIRA_DOMAIN` is not set.
pub const DEFAULT_JIRA_DOMAIN: &str = "ybymartech.atlassian.net";

/// Raw, unvalidated settings as read from the environment.
#[derive(Clone, Default)]
pub struct ConfigInputs {
    /// `JIRA_EMAIL`: tracker account identifier.
    pub jira_email: Option<String>,
    /// `JIRA_API_TOKEN`: tracker API token.
    pub jira_api_token: Option<String>,
    /// `SLACK_WEBHOOK_URL`: chat webhook.
    pub slack_webhook_url: Option<String>,
    /// `JIRA_DOMAIN`: tracker host name or full base URL.
    pub jira_domain: Option<String>,
    /// `EMAIL_SENDER`
    pub email_sender: Option<String>,
    /// `EMAIL_PASSWORD`
    pub email_password: Option<String>,
    /// `EMAIL_RECIPIENTS`, comma-separated.
    pub email_recipients: Option<String>,
    /// `EMAIL_PROVIDER`: `gmail` or `outlook`.
    pub email_provider: Option<String>,
    /// Optional TOML config file.
    pub config_file: Option<PathBuf>,
}

/// Validated configuration for a report run.
#[derive(Clone)]
pub struct ReportConfig {
    tracker_url: Url,
    jira_email: String,
    jira_api_token: String,
    webhook_url: Url,
    email: EmailConfig,
    status_emojis: StatusEmojis,
}

impl ReportConfig {
    /// Validates raw inputs into a configuration.
    ///
    /// Empty values count as missing. All missing required variables are
    /// reported together.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariables`] if any of `JIRA_EMAIL`,
    /// `JIRA_API_TOKEN` or `SLACK_WEBHOOK_URL` is absent, or another
    /// [`ConfigError`] if a URL or the config file is invalid.
    pub fn resolve(inputs: ConfigInputs) -> Result<Self, ConfigError> {
        let jira_email = non_empty(inputs.jira_email);
        let jira_api_token = non_empty(inputs.jira_api_token);
        let webhook = non_empty(inputs.slack_webhook_url);

        let (Some(jira_email), Some(jira_api_token), Some(webhook)) =
            (jira_email.as_ref(), jira_api_token.as_ref(), webhook.as_ref())
        else {
            let names = [
                ("JIRA_EMAIL", jira_email.is_none()),
                ("JIRA_API_TOKEN", jira_api_token.is_none()),
                ("SLACK_WEBHOOK_URL", webhook.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect();
            return Err(ConfigError::MissingVariables { names });
        };

        let webhook_url = Url::parse(webhook).map_err(|e| ConfigError::InvalidUrl {
            name: "SLACK_WEBHOOK_URL",
            value: webhook.clone(),
            source: e,
        })?;

        let domain = non_empty(inputs.jira_domain).unwrap_or_else(|| DEFAULT_JIRA_DOMAIN.to_string());
        let tracker_url = tracker_base_url(&domain)?;

        let status_emojis = match inputs.config_file {
            Some(path) => {
                info!(path = %path.display(), "Using config file");
                ConfigFile::load(&path)?.status_emojis()
            }
            None => StatusEmojis::default(),
        };

        let email = EmailConfig::from_raw(
            inputs.email_sender,
            inputs.email_password,
            inputs.email_recipients.as_deref(),
            inputs.email_provider.as_deref(),
        );

        debug!(tracker = %tracker_url, provider = %email.provider, "Resolved configuration");

        Ok(Self {
            tracker_url,
            jira_email: jira_email.clone(),
            jira_api_token: jira_api_token.clone(),
            webhook_url,
            email,
            status_emojis,
        })
    }

    /// Returns the tracker base URL. Always ends with `/`.
    pub fn tracker_url(&self) -> &Url {
        &self.tracker_url
    }

    /// Returns the tracker account identifier.
    pub fn jira_email(&self) -> &str {
        &self.jira_email
    }

    /// Returns the tracker API token.
    pub fn jira_api_token(&self) -> &str {
        &self.jira_api_token
    }

    /// Returns the chat webhook URL.
    pub fn webhook_url(&self) -> &Url {
        &self.webhook_url
    }

    /// Returns the email settings.
    pub fn email(&self) -> &EmailConfig {
        &self.email
    }

    /// Returns the status emoji table.
    pub fn status_emojis(&self) -> &StatusEmojis {
        &self.status_emojis
    }

    /// Builds the browse URL for an issue key.
    #[must_use]
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}browse/{key}", self.tracker_url)
    }
}

impl fmt::Debug for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportConfig")
            .field("tracker_url", &self.tracker_url.as_str())
            .field("jira_email", &self.jira_email)
            .field("jira_api_token", &"<redacted>")
            .field("webhook_url", &"<redacted>")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Turns `JIRA_DOMAIN` into a base URL. Bare host names get `https://`.
fn tracker_base_url(domain: &str) -> Result<Url, ConfigError> {
    let domain = domain.trim();
    let raw = if domain.contains("://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    };

    let mut url = Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
        name: "JIRA_DOMAIN",
        value: domain.to_string(),
        source: e,
    })?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_inputs() -> ConfigInputs {
        ConfigInputs {
            jira_email: Some("pmo@example.com".to_string()),
            jira_api_token: Some("token".to_string()),
            slack_webhook_url: Some("https://hooks.slack.com/services/T/B/X".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn resolves_complete_inputs_with_default_domain() {
        let config = ReportConfig::resolve(complete_inputs()).unwrap();
        assert_eq!(config.tracker_url().as_str(), "https://ybymartech.atlassian.net/");
        assert_eq!(
            config.browse_url("PMO-7"),
            "https://ybymartech.atlassian.net/browse/PMO-7"
        );
        assert!(config.email().account().is_err());
    }

    #[test]
    fn reports_every_missing_variable() {
        let inputs = ConfigInputs {
            jira_api_token: Some("token".to_string()),
            slack_webhook_url: Some("  ".to_string()),
            ..Default::default()
        };

        match ReportConfig::resolve(inputs) {
            Err(ConfigError::MissingVariables { names }) => {
                assert_eq!(names, vec!["JIRA_EMAIL", "SLACK_WEBHOOK_URL"]);
            }
            other => panic!("expected missing variables, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_webhook_url() {
        let inputs = ConfigInputs {
            slack_webhook_url: Some("not a url".to_string()),
            ..complete_inputs()
        };
        assert!(matches!(
            ReportConfig::resolve(inputs),
            Err(ConfigError::InvalidUrl { name: "SLACK_WEBHOOK_URL", .. })
        ));
    }

    #[test]
    fn domain_may_be_full_url_with_path() {
        let inputs = ConfigInputs {
            jira_domain: Some("http://127.0.0.1:8080/jira".to_string()),
            ..complete_inputs()
        };
        let config = ReportConfig::resolve(inputs).unwrap();
        assert_eq!(config.tracker_url().as_str(), "http://127.0.0.1:8080/jira/");
        assert_eq!(
            config.browse_url("ABC-1"),
            "http://127.0.0.1:8080/jira/browse/ABC-1"
        );
    }

    #[test]
    fn debug_output_hides_secrets() {
        let inputs = ConfigInputs {
            jira_api_token: Some("s3cr3t-token".to_string()),
            ..complete_inputs()
        };
        let config = ReportConfig::resolve(inputs).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cr3t-token"));
        assert!(!debug.contains("hooks.slack.com"));
    }
}
