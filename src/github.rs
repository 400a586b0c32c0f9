use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

const API_ROOT: &str = "https://api.github.com";

fn repos_url(user: &str) -> String {
    format!("{API_ROOT}/users/{user}/repos")
}

fn commits_url(user: &str, repo: &str) -> String {
    format!("{API_ROOT}/repos/{user}/{repo}/commits")
}

/// Outcome of one API fetch: the decoded payload, or the non-success
/// status the API answered with. The caller decides what a denied fetch
/// degrades to; nothing is substituted here.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Payload(T),
    Denied(StatusCode),
}

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
}

impl GithubClient {
    /// Create a REST client for api.github.com. GitHub rejects requests
    /// without a User-Agent, so the client pins one.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }

    /// Low-level GET returning the body decoded as a JSON array. Both
    /// endpoints this crate talks to answer with arrays. Transport faults
    /// and malformed bodies on a success status propagate as errors.
    async fn get_array(&self, url: &str) -> Result<FetchOutcome<Vec<Value>>> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Network error requesting {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            return Ok(FetchOutcome::Denied(status));
        }

        let records: Vec<Value> = resp
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON from {url}"))?;

        Ok(FetchOutcome::Payload(records))
    }

    /// List the repositories owned by `user`, as the raw records the API
    /// returned.
    pub async fn fetch_repositories(&self, user: &str) -> Result<FetchOutcome<Vec<Value>>> {
        self.get_array(&repos_url(user)).await
    }

    /// Number of commits in `user`/`repo`, taken as the length of the
    /// commit listing.
    pub async fn count_commits(&self, user: &str, repo: &str) -> Result<FetchOutcome<usize>> {
        let outcome = self.get_array(&commits_url(user, repo)).await?;

        Ok(match outcome {
            FetchOutcome::Payload(commits) => FetchOutcome::Payload(commits.len()),
            FetchOutcome::Denied(status) => FetchOutcome::Denied(status),
        })
    }
}
