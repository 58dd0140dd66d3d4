use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token. Optional: without it the elevated GraphQL
    /// contribution summary is skipped and the report degrades gracefully.
    pub github_token: Option<String>,
    pub max_repos: u32,
    pub max_events: u32,
}

impl Config {
    pub fn from_env() -> Self {
        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let max_repos = env::var("MAX_REPOS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        // The public events API never serves more than ~300 events.
        let max_events = env::var("MAX_EVENTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        Self {
            github_token,
            max_repos,
            max_events,
        }
    }
}
