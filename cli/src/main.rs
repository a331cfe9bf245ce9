//! CLI for the PMO report.
//!
//! Resolves a daily or weekly window, fetches the Jira issues updated in it
//! and publishes the summary to Slack and email.

use clap::error::ErrorKind;
use clap::Parser;
use pmo_report::{
    ConfigError, ConfigInputs, ReportConfig, ReportMode, RunSummary, Runner, RunnerConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// PMO Report - Publish recently updated Jira issues to Slack and email.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Report window: `daily` or `weekly`. Unknown values fall back to daily.
    #[arg(long, num_args = 0..=1, default_value = "daily", default_missing_value = "daily")]
    mode: String,

    /// Optional TOML file with extra status emojis.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report instead of delivering it.
    #[arg(long)]
    dry_run: bool,

    /// Jira account email.
    #[arg(long, env = "JIRA_EMAIL", hide_env_values = true)]
    jira_email: Option<String>,

    /// Jira API token.
    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true)]
    jira_api_token: Option<String>,

    /// Slack incoming webhook URL.
    #[arg(long, env = "SLACK_WEBHOOK_URL", hide_env_values = true)]
    slack_webhook_url: Option<String>,

    /// Jira site host name or base URL.
    #[arg(long, env = "JIRA_DOMAIN")]
    jira_domain: Option<String>,

    /// Email sender address.
    #[arg(long, env = "EMAIL_SENDER")]
    email_sender: Option<String>,

    /// Email sender password.
    #[arg(long, env = "EMAIL_PASSWORD", hide_env_values = true)]
    email_password: Option<String>,

    /// Comma-separated email recipients.
    #[arg(long, env = "EMAIL_RECIPIENTS")]
    email_recipients: Option<String>,

    /// Email provider: `gmail` or `outlook`.
    #[arg(long, env = "EMAIL_PROVIDER")]
    email_provider: Option<String>,

    /// Unrecognised positional arguments, ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

impl Args {
    fn config_inputs(&self) -> ConfigInputs {
        ConfigInputs {
            jira_email: self.jira_email.clone(),
            jira_api_token: self.jira_api_token.clone(),
            slack_webhook_url: self.slack_webhook_url.clone(),
            jira_domain: self.jira_domain.clone(),
            email_sender: self.email_sender.clone(),
            email_password: self.email_password.clone(),
            email_recipients: self.email_recipients.clone(),
            email_provider: self.email_provider.clone(),
            config_file: self.config.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = parse_args();
    if !args.rest.is_empty() {
        warn!(args = ?args.rest, "Ignoring unrecognised arguments");
    }

    let report = match ReportConfig::resolve(args.config_inputs()) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Configuration error");
            if let ConfigError::MissingVariables { .. } = e {
                eprintln!(
                    "Make sure JIRA_EMAIL, JIRA_API_TOKEN and SLACK_WEBHOOK_URL are set."
                );
            }
            return ExitCode::from(1);
        }
    };

    let mode = ReportMode::from_arg(&args.mode);
    let config = RunnerConfig::new(report, mode).with_dry_run(args.dry_run);

    let runner = match Runner::new(config) {
        Ok(runner) => runner,
        Err(e) => {
            error!(error = %e, "Critical failure");
            return ExitCode::from(1);
        }
    };

    let summary = runner.run().await;
    print_summary(&summary);

    // Delivery failures are reported above but don't fail the job.
    ExitCode::SUCCESS
}

/// Parses arguments, falling back to defaults (daily mode, environment
/// settings) when the invocation is malformed. Help and version still exit.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            warn!(error = %e.kind(), "Invalid arguments, using defaults");
            Args::parse_from([env!("CARGO_BIN_NAME")])
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {} ({})",
        summary.mode,
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Period: {} to {}", summary.start, summary.end);
    println!("  Issues found: {}", summary.issues_found());
    println!("  Chat: {}", summary.chat);
    println!("  Email: {}", summary.email);
}
