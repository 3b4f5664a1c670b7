use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::error::SearchError;

/// One directory entry returned by the search endpoint.
///
/// Only `id` (the distinguished name) is consumed; other fields such as
/// `text` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryEntry {
    pub id: String,
}

impl DirectoryEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Body of a successful search: `{ "results": [ { "id": ... }, ... ] }`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<DirectoryEntry>,
}

/// Body the endpoint sends alongside a non-2xx status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Parse a raw response body. A body without `results` is malformed.
pub fn parse_search_response(body: &str) -> Result<Vec<DirectoryEntry>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.results)
}

/// Error for a non-2xx answer. The endpoint reports directory failures as
/// `{"error": "..."}`; any other body falls back to the status reason.
pub fn status_error(status: StatusCode, body: &str) -> SearchError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.error)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string());

    SearchError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Remote source of directory entries for a typed term
#[async_trait]
pub trait DirectorySearch: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<DirectoryEntry>, SearchError>;
}

#[derive(Clone)]
pub struct DirectoryClient {
    base_url: String,
    search_path: String,
    session_cookie: Option<String>,
    client: Client,
}

impl DirectoryClient {
    pub fn new(
        base_url: String,
        search_path: String,
        session_cookie: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            search_path,
            session_cookie,
            client,
        })
    }

    /// Full request URL for a term. The term is the only parameter.
    pub fn search_url(&self, term: &str) -> String {
        let path = if self.search_path.starts_with('/') {
            self.search_path.clone()
        } else {
            format!("/{}", self.search_path)
        };

        let query = crate::logic::query::build_query_params(term)
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}{}?{}", self.base_url, path, query)
    }
}

#[async_trait]
impl DirectorySearch for DirectoryClient {
    async fn search(&self, term: &str) -> Result<Vec<DirectoryEntry>, SearchError> {
        let url = self.search_url(term);
        tracing::debug!(%url, "searching directory");

        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(cookie) = &self.session_cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, &text));
        }

        parse_search_response(&text)
    }
}
