use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The event kinds the insights engine cares about. Everything else the
/// events API emits (watch, create, delete, comment, ...) maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "PushEvent")]
    Push,
    #[serde(rename = "PullRequestEvent")]
    PullRequest,
    #[serde(rename = "IssuesEvent")]
    Issues,
    #[serde(rename = "PullRequestReviewEvent")]
    Review,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushCommit {
    pub sha: String,
    #[serde(default)]
    pub message: String,
}

/// Push payloads itemize commits; other payloads are ignored wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Vec<PushCommit>,
}

/// A discrete activity record from the public events API. The API caps
/// history at ~300 events, so this is the least reliable signal and is
/// only used when richer sources are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub repo: EventRepo,
    #[serde(default)]
    pub payload: EventPayload,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Commits carried by a push event. A push whose payload omits the
    /// commit list still represents at least one commit.
    pub fn commit_count(&self) -> u32 {
        match self.kind {
            EventKind::Push => (self.payload.commits.len() as u32).max(1),
            _ => 0,
        }
    }
}
