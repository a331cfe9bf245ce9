//! Report delivery to chat and email.

mod chat;
mod email;
mod error;
mod status;

pub use chat::ChatClient;
pub use email::{send_email, smtp_profile, SmtpProfile, SmtpSecurity};
pub use error::DeliveryError;
pub use status::DeliveryStatus;
