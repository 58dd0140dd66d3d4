use serde::{Deserialize, Serialize};

/// Repository metadata attached to a per-repository commit contribution
/// record from the GraphQL contributions collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributedRepository {
    pub name: String,
    pub name_with_owner: String,
    pub url: String,
    pub stargazer_count: u32,
    pub primary_language: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoCommitContribution {
    pub repository: ContributedRepository,
    pub commit_count: u32,
}

/// Server-computed contribution totals for one year. Only available when an
/// authenticated GraphQL query succeeds; when present it is authoritative
/// over both the calendar and the raw event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionSummary {
    pub total_contributions: u32,
    pub total_commit_contributions: u32,
    pub total_pull_request_contributions: u32,
    pub total_issue_contributions: u32,
    pub total_pull_request_review_contributions: u32,
    pub total_repositories_with_contributed_commits: u32,
    /// Up to 20 repositories ranked by commit contribution count.
    pub commit_contributions_by_repository: Vec<RepoCommitContribution>,
}
