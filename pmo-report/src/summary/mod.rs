//! Run summary types and helpers.

mod fetch;
mod run_summary;

pub use fetch::FetchOutcome;
pub use run_summary::RunSummary;
