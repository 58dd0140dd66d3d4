//! Builders for synthetic activity data used across the stage tests.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{
    ContributedRepository, ContributionCalendar, ContributionDay, ContributionLevel,
    ContributionSummary, ContributionWeek, Event, EventKind, EventPayload, EventRepo, GitHubUser,
    PushCommit, RepoCommitContribution, Repository,
};

use super::activity::{peak_hour_range, ActivityPatterns, DAYS};

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

pub fn datetime(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

pub fn simple_event(id: u64, repo: &str, kind: EventKind) -> Event {
    Event {
        id: id.to_string(),
        kind,
        repo: EventRepo {
            name: repo.to_string(),
        },
        payload: EventPayload::default(),
        created_at: datetime("2024-01-15T12:00:00Z"),
    }
}

pub fn push_event(id: u64, repo: &str, commits: usize) -> Event {
    let mut event = simple_event(id, repo, EventKind::Push);
    event.payload.commits = (0..commits)
        .map(|i| PushCommit {
            sha: format!("{id}-{i}"),
            message: String::new(),
        })
        .collect();
    event
}

pub fn event_at(kind: EventKind, at: &str) -> Event {
    let mut event = simple_event(0, "user/repo", kind);
    event.created_at = datetime(at);
    event
}

/// A calendar of consecutive days starting at `start`, grouped into weeks
/// of up to 7 days.
pub fn calendar_from_counts(start: &str, counts: &[u32]) -> ContributionCalendar {
    let start = date(start);
    let days: Vec<ContributionDay> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| ContributionDay {
            date: start + Duration::days(i as i64),
            contribution_count: count,
            contribution_level: ContributionLevel::from_count(count),
        })
        .collect();

    ContributionCalendar {
        total_contributions: counts.iter().sum(),
        weeks: days
            .chunks(7)
            .map(|chunk| ContributionWeek {
                days: chunk.to_vec(),
            })
            .collect(),
    }
}

pub fn summary(
    total: u32,
    commits: u32,
    prs: u32,
    issues: u32,
    reviews: u32,
    repos: u32,
) -> ContributionSummary {
    ContributionSummary {
        total_contributions: total,
        total_commit_contributions: commits,
        total_pull_request_contributions: prs,
        total_issue_contributions: issues,
        total_pull_request_review_contributions: reviews,
        total_repositories_with_contributed_commits: repos,
        commit_contributions_by_repository: Vec::new(),
    }
}

pub fn repo_contribution(name: &str, commits: u32, stars: u32) -> RepoCommitContribution {
    RepoCommitContribution {
        repository: ContributedRepository {
            name: name.to_string(),
            name_with_owner: format!("user/{name}"),
            url: format!("https://github.com/user/{name}"),
            stargazer_count: stars,
            primary_language: None,
            description: None,
        },
        commit_count: commits,
    }
}

pub fn repo(id: u64, name: &str, language: Option<&str>, stars: u32, fork: bool) -> Repository {
    let created = datetime("2024-02-01T00:00:00Z");
    Repository {
        id,
        name: name.to_string(),
        full_name: format!("user/{name}"),
        html_url: format!("https://github.com/user/{name}"),
        description: None,
        language: language.map(str::to_string),
        fork,
        stargazers_count: stars,
        watchers_count: 0,
        forks_count: 0,
        open_issues_count: 0,
        size: 0,
        created_at: created,
        updated_at: created,
        pushed_at: Some(created),
        topics: Vec::new(),
    }
}

pub fn repo_pushed_at(id: u64, name: &str, stars: u32, pushed: DateTime<Utc>) -> Repository {
    let mut r = repo(id, name, None, stars, false);
    r.pushed_at = Some(pushed);
    r
}

pub fn patterns_with(hour: u32, by_day: [u32; 7]) -> ActivityPatterns {
    ActivityPatterns {
        most_productive_day: DAYS[0].to_string(),
        most_productive_hour: hour,
        peak_hour_range: peak_hour_range(hour),
        activity_by_day: by_day,
        activity_by_hour: [0; 24],
        monthly_activity: Vec::new(),
    }
}

pub fn user(login: &str) -> GitHubUser {
    GitHubUser {
        login: login.to_string(),
        id: 1,
        name: None,
        email: None,
        avatar_url: format!("https://avatars.githubusercontent.com/{login}"),
        html_url: format!("https://github.com/{login}"),
        bio: None,
        company: None,
        blog: None,
        location: None,
        twitter_username: None,
        public_repos: 0,
        public_gists: 0,
        followers: 0,
        following: 0,
        created_at: datetime("2019-01-01T00:00:00Z"),
    }
}
