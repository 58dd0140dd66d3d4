pub mod config;
pub mod error;
pub mod github;
pub mod insights;
pub mod models;
pub mod report;

pub use config::Config;
pub use error::{Error, Result};
pub use github::{fetch_all_activity, GitHubClient};
pub use insights::calculate_insights;
