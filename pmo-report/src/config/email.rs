//! Email delivery settings.

use std::fmt;

/// SMTP provider used for email delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailProvider {
    /// Gmail, implicit TLS on port 465.
    #[default]
    Gmail,
    /// Outlook / Office 365, STARTTLS on port 587.
    Outlook,
}

impl EmailProvider {
    /// Parses a provider name. Anything other than `outlook` selects Gmail.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("outlook") {
            Self::Outlook
        } else {
            Self::Gmail
        }
    }

    /// Returns the provider name as used in `EMAIL_PROVIDER`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gmail => "gmail",
            Self::Outlook => "outlook",
        }
    }
}

impl fmt::Display for EmailProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email settings. All fields are optional at startup and only checked when
/// an email is actually sent.
#[derive(Clone, Default)]
pub struct EmailConfig {
    /// Sender address, also used as the SMTP login.
    pub sender: Option<String>,
    /// SMTP password or app password for the sender.
    pub password: Option<String>,
    /// Recipient addresses.
    pub recipients: Vec<String>,
    /// SMTP provider.
    pub provider: EmailProvider,
}

// Hand-written so the password never ends up in logs.
impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("sender", &self.sender)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("recipients", &self.recipients)
            .field("provider", &self.provider)
            .finish()
    }
}

/// Email settings that passed the "is configured" check.
#[derive(Debug, Clone, Copy)]
pub struct EmailAccount<'a> {
    pub sender: &'a str,
    pub password: &'a str,
    pub recipients: &'a [String],
    pub provider: EmailProvider,
}

impl EmailConfig {
    /// Builds email settings from raw environment values.
    #[must_use]
    pub fn from_raw(
        sender: Option<String>,
        password: Option<String>,
        recipients: Option<&str>,
        provider: Option<&str>,
    ) -> Self {
        Self {
            sender: non_empty(sender),
            password: non_empty(password),
            recipients: recipients.map(parse_recipients).unwrap_or_default(),
            provider: provider.map(EmailProvider::from_name).unwrap_or_default(),
        }
    }

    /// Returns the account to send with, or the names of the missing settings.
    pub fn account(&self) -> Result<EmailAccount<'_>, Vec<&'static str>> {
        match (&self.sender, &self.password, self.recipients.is_empty()) {
            (Some(sender), Some(password), false) => Ok(EmailAccount {
                sender,
                password,
                recipients: &self.recipients,
                provider: self.provider,
            }),
            _ => {
                let mut missing = Vec::new();
                if self.sender.is_none() {
                    missing.push("EMAIL_SENDER");
                }
                if self.password.is_none() {
                    missing.push("EMAIL_PASSWORD");
                }
                if self.recipients.is_empty() {
                    missing.push("EMAIL_RECIPIENTS");
                }
                Err(missing)
            }
        }
    }
}

/// Splits a comma-separated recipient list, dropping blank entries.
#[must_use]
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
