use reqwest::{header, Client, StatusCode};

use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::models::{Event, GitHubUser, Repository};

pub struct GitHubClient {
    client: Client,
    base_url: String,
    authenticated: bool,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitwrapped/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
            authenticated: token.is_some(),
        })
    }

    /// Whether a token was supplied. The elevated GraphQL query is only
    /// attempted for authenticated clients.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }
        if response.status() == StatusCode::FORBIDDEN {
            return Err(Error::RateLimited);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch user {}: {} - {}",
                username, status, body
            )));
        }

        Ok(response.json().await?)
    }

    pub async fn get_user_repos(&self, username: &str, max_repos: u32) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?type=owner&sort=updated",
            self.base_url, username
        );
        tracing::info!("Fetching repositories for: {}", username);
        Paginator::new(&self.client).fetch_limited(&url, 100, max_repos).await
    }

    pub async fn get_user_events(&self, username: &str, max_events: u32) -> Result<Vec<Event>> {
        let url = format!("{}/users/{}/events", self.base_url, username);
        tracing::info!("Fetching recent events for: {}", username);
        Paginator::new(&self.client).fetch_limited(&url, 100, max_events).await
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
