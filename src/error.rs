use thiserror::Error;

/// Failure of one query cycle against the directory-search endpoint
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directory endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed search response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
