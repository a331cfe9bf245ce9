//! Chat webhook delivery.

use super::{DeliveryError, DeliveryStatus};
use crate::config::ReportConfig;
use crate::report::ChatMessage;
use tracing::{error, info, info_span, Instrument};
use url::Url;

/// Posts report messages to the configured chat webhook.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    webhook_url: Url,
}

impl ChatClient {
    /// Creates a client for the webhook in `config`.
    #[must_use]
    pub fn new(http: reqwest::Client, config: &ReportConfig) -> Self {
        Self {
            http,
            webhook_url: config.webhook_url().clone(),
        }
    }

    /// Posts `message` to the webhook.
    ///
    /// Failures are logged and reported through the returned status; they
    /// never abort the run.
    pub async fn post(&self, message: &ChatMessage) -> DeliveryStatus {
        async {
            let result = self.try_post(message).await;
            match &result {
                Ok(()) => info!("Report posted to chat"),
                Err(e) => error!(error = %e, "Failed to post report to chat"),
            }
            DeliveryStatus::from(result)
        }
        .instrument(info_span!("post_chat", blocks = message.blocks.len()))
        .await
    }

    async fn try_post(&self, message: &ChatMessage) -> Result<(), DeliveryError> {
        let response = self
            .http
            .post(self.webhook_url.clone())
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Status { status, body })
    }
}
