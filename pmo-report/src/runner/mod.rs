//! Orchestrates a report run: resolve window, fetch, format, deliver.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::date_range::{self, DateRange};
use crate::delivery::{send_email, ChatClient, DeliveryStatus};
use crate::report::{format_chat_message, format_email, ChatMessage, EmailBody};
use crate::summary::{FetchOutcome, RunSummary};
use crate::templates::TemplateRenderer;
use crate::tracker::{Issue, TrackerClient};
use chrono::Local;
use tracing::{error, info, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Runs one report end to end.
pub struct Runner {
    config: RunnerConfig,
    tracker: TrackerClient,
    chat: ChatClient,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the HTTP client, tracker endpoint or
    /// built-in templates can't be set up.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let tracker = TrackerClient::new(http.clone(), config.report())?;
        let chat = ChatClient::new(http, config.report());
        Ok(Self {
            config,
            tracker,
            chat,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Executes the run.
    ///
    /// Fetch and delivery failures are recorded in the summary rather than
    /// returned: a failed fetch produces a report with zero issues, and a
    /// failed chat post doesn't stop the email.
    pub async fn run(&self) -> RunSummary {
        let mode = self.config.mode();
        let now = self
            .config
            .now()
            .unwrap_or_else(|| Local::now().naive_local());
        let range = date_range::resolve(mode, now);
        let mut summary = RunSummary::new(mode, &range, self.config.dry_run());

        info!(mode = %mode, "Running report");
        info!(start = %range.start, end = %range.end, "Fetching issues");

        let issues = match self.tracker.search_updated(&range).await {
            Ok(issues) => {
                summary.fetch = FetchOutcome::Fetched {
                    count: issues.len(),
                };
                issues
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch issues, reporting none");
                summary.fetch = FetchOutcome::Failed {
                    error: e.to_string(),
                };
                Vec::new()
            }
        };
        info!(count = issues.len(), "Found issues");

        let report = self.config.report();
        let chat_message = format_chat_message(&issues, &range, report);
        let email = self.render_email(&issues, &range);

        if self.config.dry_run() {
            print_dry_run_preview(&chat_message, email.as_ref());
            let dry_run = || DeliveryStatus::Skipped {
                reason: "dry run".to_string(),
            };
            summary.chat = dry_run();
            summary.email = dry_run();
            return summary;
        }

        summary.chat = self.chat.post(&chat_message).await;
        summary.email = match email {
            Some(body) => send_email(report.email(), &body).await,
            None => DeliveryStatus::Failed {
                error: "email body could not be rendered".to_string(),
            },
        };

        summary
    }

    fn render_email(&self, issues: &[Issue], range: &DateRange) -> Option<EmailBody> {
        match format_email(&self.renderer, issues, range, self.config.report()) {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(error = %e, "Failed to render email body");
                None
            }
        }
    }
}

fn print_dry_run_preview(chat_message: &ChatMessage, email: Option<&EmailBody>) {
    println!("\n[DRY RUN] Chat payload:");
    match serde_json::to_string_pretty(chat_message) {
        Ok(json) => {
            for line in json.lines() {
                println!("  {line}");
            }
        }
        Err(e) => println!("  <failed to serialize: {e}>"),
    }

    if let Some(email) = email {
        println!("\n[DRY RUN] Email subject: {}", email.subject);
        for line in email.plain.lines() {
            println!("  {line}");
        }
    }

    println!();
}
