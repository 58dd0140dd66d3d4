//! Elevated-privilege contribution query. Only attempted with a token; any
//! failure here is treated by the fetcher as "summary absent", never as a
//! hard error.

use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{
    ContributedRepository, ContributionCalendar, ContributionDay, ContributionLevel,
    ContributionSummary, ContributionWeek, RepoCommitContribution,
};

const GRAPHQL_URL: &str = "https://api.github.com/graphql";

const CONTRIBUTIONS_QUERY: &str = r#"
query($username: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $username) {
    contributionsCollection(from: $from, to: $to) {
      totalCommitContributions
      totalPullRequestContributions
      totalIssueContributions
      totalPullRequestReviewContributions
      totalRepositoriesWithContributedCommits
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
            contributionLevel
          }
        }
      }
      commitContributionsByRepository(maxRepositories: 20) {
        repository {
          name
          nameWithOwner
          url
          primaryLanguage {
            name
          }
          stargazerCount
          description
        }
        contributions {
          totalCount
        }
      }
    }
  }
}
"#;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    username: &'a str,
    from: String,
    to: String,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct ResponseData {
    user: Option<UserNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    contributions_collection: Option<CollectionNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionNode {
    total_commit_contributions: u32,
    total_pull_request_contributions: u32,
    total_issue_contributions: u32,
    total_pull_request_review_contributions: u32,
    total_repositories_with_contributed_commits: u32,
    contribution_calendar: CalendarNode,
    #[serde(default)]
    commit_contributions_by_repository: Vec<RepoContributionNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarNode {
    total_contributions: u32,
    weeks: Vec<WeekNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeekNode {
    contribution_days: Vec<DayNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayNode {
    date: NaiveDate,
    contribution_count: u32,
    contribution_level: ContributionLevel,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepoContributionNode {
    repository: RepoNode,
    contributions: ContributionCount,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepoNode {
    name: String,
    name_with_owner: String,
    url: String,
    primary_language: Option<LanguageNode>,
    stargazer_count: u32,
    description: Option<String>,
}

#[derive(Deserialize)]
struct LanguageNode {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionCount {
    total_count: u32,
}

/// Fetch the server-computed contribution summary for one year, along with
/// the authoritative calendar embedded in it.
pub async fn fetch_contribution_summary(
    client: &Client,
    username: &str,
    year: i32,
) -> Result<(ContributionSummary, ContributionCalendar)> {
    tracing::info!("Fetching contribution summary for: {}", username);

    let request = GraphQlRequest {
        query: CONTRIBUTIONS_QUERY,
        variables: Variables {
            username,
            from: format!("{year}-01-01T00:00:00Z"),
            to: format!("{year}-12-31T23:59:59Z"),
        },
    };

    let response = client.post(GRAPHQL_URL).json(&request).send().await?;
    if !response.status().is_success() {
        return Err(Error::GitHubApi(format!(
            "GraphQL request failed with status {}",
            response.status()
        )));
    }

    let body: GraphQlResponse = response.json().await?;
    if let Some(error) = body.errors.first() {
        return Err(Error::GitHubApi(format!("GraphQL error: {}", error.message)));
    }

    let collection = body
        .data
        .and_then(|d| d.user)
        .and_then(|u| u.contributions_collection)
        .ok_or_else(|| {
            Error::GitHubApi(format!("No contributions collection for user {}", username))
        })?;

    Ok(into_models(collection))
}

fn into_models(collection: CollectionNode) -> (ContributionSummary, ContributionCalendar) {
    let calendar = ContributionCalendar {
        total_contributions: collection.contribution_calendar.total_contributions,
        weeks: collection
            .contribution_calendar
            .weeks
            .into_iter()
            .map(|week| ContributionWeek {
                days: week
                    .contribution_days
                    .into_iter()
                    .map(|day| ContributionDay {
                        date: day.date,
                        contribution_count: day.contribution_count,
                        contribution_level: day.contribution_level,
                    })
                    .collect(),
            })
            .collect(),
    };

    let summary = ContributionSummary {
        total_contributions: calendar.total_contributions,
        total_commit_contributions: collection.total_commit_contributions,
        total_pull_request_contributions: collection.total_pull_request_contributions,
        total_issue_contributions: collection.total_issue_contributions,
        total_pull_request_review_contributions: collection
            .total_pull_request_review_contributions,
        total_repositories_with_contributed_commits: collection
            .total_repositories_with_contributed_commits,
        commit_contributions_by_repository: collection
            .commit_contributions_by_repository
            .into_iter()
            .map(|node| RepoCommitContribution {
                repository: ContributedRepository {
                    name: node.repository.name,
                    name_with_owner: node.repository.name_with_owner,
                    url: node.repository.url,
                    stargazer_count: node.repository.stargazer_count,
                    primary_language: node.repository.primary_language.map(|l| l.name),
                    description: node.repository.description,
                },
                commit_count: node.contributions.total_count,
            })
            .collect(),
    };

    (summary, calendar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_graphql_payload_into_models() {
        let json = r#"{
            "data": {
                "user": {
                    "contributionsCollection": {
                        "totalCommitContributions": 42,
                        "totalPullRequestContributions": 7,
                        "totalIssueContributions": 3,
                        "totalPullRequestReviewContributions": 2,
                        "totalRepositoriesWithContributedCommits": 5,
                        "contributionCalendar": {
                            "totalContributions": 60,
                            "weeks": [
                                {
                                    "contributionDays": [
                                        {
                                            "date": "2024-01-07",
                                            "contributionCount": 4,
                                            "contributionLevel": "SECOND_QUARTILE"
                                        }
                                    ]
                                }
                            ]
                        },
                        "commitContributionsByRepository": [
                            {
                                "repository": {
                                    "name": "hello",
                                    "nameWithOwner": "octocat/hello",
                                    "url": "https://github.com/octocat/hello",
                                    "primaryLanguage": { "name": "Rust" },
                                    "stargazerCount": 12,
                                    "description": null
                                },
                                "contributions": { "totalCount": 30 }
                            }
                        ]
                    }
                }
            }
        }"#;

        let body: GraphQlResponse = serde_json::from_str(json).unwrap();
        let collection = body.data.unwrap().user.unwrap().contributions_collection.unwrap();
        let (summary, calendar) = into_models(collection);

        assert_eq!(summary.total_commit_contributions, 42);
        assert_eq!(summary.total_contributions, 60);
        assert_eq!(summary.commit_contributions_by_repository.len(), 1);
        let top = &summary.commit_contributions_by_repository[0];
        assert_eq!(top.commit_count, 30);
        assert_eq!(top.repository.primary_language.as_deref(), Some("Rust"));

        assert_eq!(calendar.total_contributions, 60);
        assert_eq!(calendar.weeks[0].days[0].contribution_count, 4);
        assert_eq!(
            calendar.weeks[0].days[0].contribution_level,
            ContributionLevel::SecondQuartile
        );
    }

    #[test]
    fn graphql_errors_are_reported() {
        let json = r#"{ "data": null, "errors": [{ "message": "bad credentials" }] }"#;
        let body: GraphQlResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.errors[0].message, "bad credentials");
    }
}
