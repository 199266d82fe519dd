use std::{fmt, io::Error};

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::warning;

pub const NO_CREDENTIAL_MESSAGE: &str =
    "No valid tokens found. Please complete OAuth setup first.";

#[derive(Debug)]
pub enum StoreError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for StoreError {
    fn from(err: Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerdeError(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "store I/O error: {}", e),
            StoreError::SerdeError(e) => write!(f, "store encoding error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Failure of a single authorization-code exchange against the token endpoint.
#[derive(Debug)]
pub enum ExchangeError {
    /// The token endpoint answered with a non-success status.
    Rejected(StatusCode),
    Transport(reqwest::Error),
    Malformed(reqwest::Error),
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeError::Rejected(status) => write!(
                f,
                "Token exchange failed: {}",
                status.canonical_reason().unwrap_or(status.as_str())
            ),
            ExchangeError::Transport(e) => write!(f, "Token request failed: {}", e),
            ExchangeError::Malformed(e) => write!(f, "Unreadable token response: {}", e),
        }
    }
}

impl std::error::Error for ExchangeError {}

/// Every way a request to the relay can fail.
///
/// Each variant maps to exactly one HTTP response shape through
/// [`IntoResponse`]. None of them is retried.
#[derive(Debug)]
pub enum RelayError {
    /// Client credentials are missing (500, plain text).
    Configuration(String),
    /// Malformed or forged callback (400, plain text).
    Validation(String),
    /// Spotify refused the authorization code (400, plain text).
    UpstreamAuth(String),
    /// No unexpired credential in the vault (401, JSON).
    NoCredential,
    /// Spotify data call returned a non-success status (status passed through, JSON).
    UpstreamData { status: StatusCode, message: String },
    Store(StoreError),
    Unhandled(String),
}

impl From<StoreError> for RelayError {
    fn from(err: StoreError) -> Self {
        RelayError::Store(err)
    }
}

impl From<ExchangeError> for RelayError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::Rejected(_) => RelayError::UpstreamAuth(err.to_string()),
            other => RelayError::Unhandled(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Unhandled(err.to_string())
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Configuration(msg)
            | RelayError::Validation(msg)
            | RelayError::UpstreamAuth(msg)
            | RelayError::Unhandled(msg) => write!(f, "{}", msg),
            RelayError::NoCredential => write!(f, "{}", NO_CREDENTIAL_MESSAGE),
            RelayError::UpstreamData { status, message } => {
                write!(f, "{} (upstream status {})", message, status)
            }
            RelayError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RelayError {}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Validation(_) | RelayError::UpstreamAuth(_) => StatusCode::BAD_REQUEST,
            RelayError::NoCredential => StatusCode::UNAUTHORIZED,
            RelayError::UpstreamData { status, .. } => *status,
            RelayError::Store(_) | RelayError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if matches!(self, RelayError::Store(_) | RelayError::Unhandled(_)) {
            warning!("Error handling request: {}", self);
        }

        match self {
            RelayError::Configuration(msg)
            | RelayError::Validation(msg)
            | RelayError::UpstreamAuth(msg) => {
                (status, [(header::CONTENT_TYPE, "text/plain")], msg).into_response()
            }
            RelayError::NoCredential => {
                (status, Json(json!({ "error": NO_CREDENTIAL_MESSAGE }))).into_response()
            }
            RelayError::UpstreamData { message, .. } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
            RelayError::Store(_) | RelayError::Unhandled(_) => {
                (status, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_exchange_becomes_bad_request() {
        let err: RelayError = ExchangeError::Rejected(StatusCode::BAD_REQUEST).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Token exchange failed: Bad Request");
    }

    #[test]
    fn upstream_data_status_passes_through() {
        let err = RelayError::UpstreamData {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "Failed to fetch recent tracks".to_string(),
        };
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn missing_credential_is_unauthorized() {
        assert_eq!(RelayError::NoCredential.status(), StatusCode::UNAUTHORIZED);
    }
}
