use crate::error::SearchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401/403, usually an expired session
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    MalformedResponse,
    Other,
}

/// Classify a failed query cycle
pub fn classify_error(error: &SearchError) -> ErrorType {
    match error {
        SearchError::Http(err) => {
            if err.is_timeout() {
                ErrorType::Timeout
            } else if err.is_connect() {
                ErrorType::ConnectionRefused
            } else if err.is_decode() {
                ErrorType::MalformedResponse
            } else {
                ErrorType::Other
            }
        }
        SearchError::Status { status, .. } => match *status {
            401 | 403 => ErrorType::Unauthorized,
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        },
        SearchError::MalformedResponse(_) => ErrorType::MalformedResponse,
    }
}

/// Short message for the dropdown's status line
pub fn format_error_message(error: &SearchError) -> String {
    match classify_error(error) {
        ErrorType::ConnectionRefused => "Directory search is unreachable.".to_string(),
        ErrorType::Timeout => "Directory search timed out.".to_string(),
        ErrorType::Unauthorized => "Not authorized to search the directory.".to_string(),
        ErrorType::NotFound => "Directory search endpoint not found.".to_string(),
        ErrorType::MalformedResponse => "The results could not be loaded.".to_string(),
        ErrorType::ServerError | ErrorType::Other => match error {
            // Endpoint-provided text is the most useful detail here
            SearchError::Status { status, message } => format!("Search failed ({}): {}", status, message),
            other => other.to_string(),
        },
    }
}
