pub mod client;
pub mod fallback;
pub mod graphql;
pub mod paginator;

pub use client::GitHubClient;
pub use paginator::Paginator;

use futures::join;

use crate::config::Config;
use crate::error::Result;
use crate::models::AllActivityData;

/// Fetch every view of a user's activity in one pass. The user profile is
/// required and its failure aborts the run; repository and event lists
/// degrade to empty; the contribution summary and calendar are optional
/// sources whose failures are logged and treated as absent. Each source is
/// fetched with a single attempt.
pub async fn fetch_all_activity(
    client: &GitHubClient,
    config: &Config,
    username: &str,
    year: i32,
) -> Result<AllActivityData> {
    let user = client.get_user(username).await?;

    let (repos, events, summary, fallback_calendar) = join!(
        client.get_user_repos(username, config.max_repos),
        client.get_user_events(username, config.max_events),
        async {
            if client.is_authenticated() {
                Some(graphql::fetch_contribution_summary(client.client(), username, year).await)
            } else {
                None
            }
        },
        fallback::fetch_fallback_calendar(client.client(), username, year),
    );

    let repos = repos.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch repositories: {}", e);
        Vec::new()
    });
    let events = events.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch events: {}", e);
        Vec::new()
    });

    let (contribution_summary, graphql_calendar) = match summary {
        Some(Ok((summary, calendar))) => (Some(summary), Some(calendar)),
        Some(Err(e)) => {
            tracing::warn!("Contribution summary unavailable: {}", e);
            (None, None)
        }
        None => (None, None),
    };

    // The GraphQL calendar is authoritative; the secondary provider only
    // fills in when it is absent.
    let contribution_calendar = match graphql_calendar {
        Some(calendar) => Some(calendar),
        None => match fallback_calendar {
            Ok(calendar) => Some(calendar),
            Err(e) => {
                tracing::warn!("Fallback calendar unavailable: {}", e);
                None
            }
        },
    };

    tracing::info!(
        "Fetched {} repos, {} events, summary: {}, calendar: {}",
        repos.len(),
        events.len(),
        contribution_summary.is_some(),
        contribution_calendar.is_some()
    );

    Ok(AllActivityData {
        user,
        repos,
        events,
        contribution_summary,
        contribution_calendar,
    })
}
