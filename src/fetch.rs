//! Repository fetcher - one authenticated GraphQL POST

use crate::config::RepoConfig;
use crate::query::build_tree_query;
use crate::{Error, Result};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde::Serialize;
use tracing::{debug, info};

/// User agent GitHub sees on every request.
pub const USER_AGENT_VALUE: &str = "request";

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

/// GitHub API client for the tree query
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Post the tree query for `config` and return the raw response body.
    ///
    /// Any non-success status aborts with [`Error::Status`]; there is no retry.
    pub async fn fetch_tree(&self, config: &RepoConfig) -> Result<String> {
        let query = build_tree_query(&config.owner, &config.repo, &config.branch);
        info!(
            "Fetching {}/{}@{} from {}",
            config.owner, config.repo, config.branch, config.endpoint
        );
        debug!("Query is {} bytes", query.len());

        let response = self
            .client
            .post(&config.endpoint)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(AUTHORIZATION, format!("token {}", config.token))
            .json(&GraphQlRequest { query: &query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status });
        }

        let body = response.text().await?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}
