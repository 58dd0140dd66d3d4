use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: u32,
    #[serde(default)]
    pub public_gists: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub open_issues_count: u32,
    #[serde(default)]
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Repos that have never been pushed report null here.
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Repository {
    /// Most recent push, falling back to the last metadata update for
    /// repositories that have never been pushed to.
    pub fn pushed_or_updated_at(&self) -> DateTime<Utc> {
        self.pushed_at.unwrap_or(self.updated_at)
    }
}
