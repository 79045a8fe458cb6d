//! GitHub contents API client
//!
//! Fetches a file's raw content as it exists on a given ref:
//! `GET /repos/{owner}/{repo}/contents/{path}?ref={ref}` with the
//! `application/vnd.github.v3.raw` accept header.
//!
//! A single attempt is made per fetch. Any failure here is recoverable at
//! the orchestration level: the comparison is skipped, never the run failed.

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// GitHub API base URL
const GITHUB_API_URL: &str = "https://api.github.com";

/// Timeout for the content fetch (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent header sent to the API
const DEFAULT_USER_AGENT: &str = concat!("version-gate/", env!("CARGO_PKG_VERSION"));

/// Raw-content accept header
const RAW_ACCEPT: &str = "application/vnd.github.v3.raw";

/// External collaborator returning raw file bytes for a path at a ref
#[async_trait]
pub trait ContentFetcher {
    /// Fetch the content of `path` as it exists at `reference`
    async fn fetch_file(&self, path: &str, reference: &str) -> Result<String, FetchError>;
}

/// Contents API client bound to one repository
pub struct GitHubClient {
    client: Client,
    api_url: String,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Create a client for `owner/repo` authenticating with `token`.
    ///
    /// An empty token sends unauthenticated requests.
    pub fn new(owner: &str, repo: &str, token: &str) -> Result<Self, FetchError> {
        Self::with_api_url(GITHUB_API_URL, owner, repo, token)
    }

    /// Create a client against a custom API base URL (for testing)
    pub fn with_api_url(
        api_url: &str,
        owner: &str,
        repo: &str,
        token: &str,
    ) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(RAW_ACCEPT));
        if !token.is_empty() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| FetchError::network("", format!("invalid token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                FetchError::network("", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url, self.owner, self.repo, path
        )
    }
}

#[async_trait]
impl ContentFetcher for GitHubClient {
    async fn fetch_file(&self, path: &str, reference: &str) -> Result<String, FetchError> {
        let url = self.contents_url(path);

        let response = self
            .client
            .get(&url)
            .query(&[("ref", reference)])
            .send()
            .await
            .map_err(|e| FetchError::network(path, e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(FetchError::not_found(path, reference)),
            status if !status.is_success() => Err(FetchError::http(path, status.as_u16())),
            _ => response
                .text()
                .await
                .map_err(|e| FetchError::network(path, e.to_string())),
        }
    }
}
