#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod date_range;
pub mod delivery;
pub mod report;
pub mod runner;
pub mod summary;
pub mod templates;
pub mod tracker;

pub use config::{
    ConfigError, ConfigFile, ConfigInputs, EmailConfig, EmailProvider, ReportConfig, StatusEmojis,
};
pub use date_range::{resolve as resolve_date_range, DateRange, ReportMode};
pub use delivery::{send_email, ChatClient, DeliveryError, DeliveryStatus};
pub use report::{format_chat_message, format_email, ChatMessage, EmailBody};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{FetchOutcome, RunSummary};
pub use templates::{TemplateError, TemplateRenderer};
pub use tracker::{Issue, TrackerClient, TrackerError};
