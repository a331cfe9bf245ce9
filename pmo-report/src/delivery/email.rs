//! SMTP email delivery.

use super::{DeliveryError, DeliveryStatus};
use crate::config::{EmailAccount, EmailConfig, EmailProvider};
use crate::report::EmailBody;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, error, info, info_span, warn, Instrument};

/// How the SMTP session is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Plain connection upgraded with STARTTLS.
    StartTls,
    /// TLS from the first byte (SMTPS).
    ImplicitTls,
}

/// Host, port and security used for a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmtpProfile {
    pub host: &'static str,
    pub port: u16,
    pub security: SmtpSecurity,
}

/// Returns the SMTP profile for `provider`.
#[must_use]
pub fn smtp_profile(provider: EmailProvider) -> SmtpProfile {
    match provider {
        EmailProvider::Outlook => SmtpProfile {
            host: "smtp.office365.com",
            port: 587,
            security: SmtpSecurity::StartTls,
        },
        EmailProvider::Gmail => SmtpProfile {
            host: "smtp.gmail.com",
            port: 465,
            security: SmtpSecurity::ImplicitTls,
        },
    }
}

/// Sends `body` to every configured recipient in one SMTP session.
///
/// Returns [`DeliveryStatus::Skipped`] without connecting when the sender,
/// password or recipients are missing. Any other failure is logged and
/// returned as [`DeliveryStatus::Failed`].
pub async fn send_email(config: &EmailConfig, body: &EmailBody) -> DeliveryStatus {
    async {
        let result = try_send(config, body).await;
        match &result {
            Ok(()) => info!(recipients = config.recipients.len(), "Report emailed"),
            Err(e) if matches!(e, DeliveryError::NotConfigured { .. }) => {
                warn!(reason = %e, "Skipping email");
            }
            Err(e) => error!(error = %e, "Failed to send report email"),
        }
        DeliveryStatus::from(result)
    }
    .instrument(info_span!("send_email", provider = %config.provider))
    .await
}

async fn try_send(config: &EmailConfig, body: &EmailBody) -> Result<(), DeliveryError> {
    let account = config
        .account()
        .map_err(|missing| DeliveryError::NotConfigured { missing })?;

    let message = build_message(&account, body)?;
    let profile = smtp_profile(account.provider);
    debug!(host = profile.host, port = profile.port, "Connecting to SMTP server");

    // Built without pooling: `send` opens one session and quits (or aborts it
    // on error) before returning.
    let transport = build_transport(&account, profile)?;
    transport.send(message).await?;
    Ok(())
}

fn build_message(account: &EmailAccount<'_>, body: &EmailBody) -> Result<Message, DeliveryError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(account.sender)?)
        .subject(body.subject.as_str());

    for recipient in account.recipients {
        builder = builder.to(parse_mailbox(recipient)?);
    }

    Ok(builder.multipart(MultiPart::alternative_plain_html(
        body.plain.clone(),
        body.html.clone(),
    ))?)
}

fn build_transport(
    account: &EmailAccount<'_>,
    profile: SmtpProfile,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, DeliveryError> {
    let builder = match profile.security {
        SmtpSecurity::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(profile.host)?,
        SmtpSecurity::ImplicitTls => AsyncSmtpTransport::<Tokio1Executor>::relay(profile.host)?,
    };

    Ok(builder
        .port(profile.port)
        .credentials(Credentials::new(
            account.sender.to_string(),
            account.password.to_string(),
        ))
        .build())
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address.parse().map_err(|e| DeliveryError::Address {
        address: address.to_string(),
        source: e,
    })
}
