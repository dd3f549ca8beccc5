use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for the prediction service
#[derive(Error, Debug)]
pub enum LabelStubError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    // Request errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // IO errors (listener bind, serve loop)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for LabelStubError
pub type Result<T> = std::result::Result<T, LabelStubError>;

impl LabelStubError {
    /// HTTP status this error maps to when it reaches a handler boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            LabelStubError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LabelStubError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Decode details stay in the logs; clients only get the error class.
        let body = match self {
            LabelStubError::InvalidInput(_) => "Invalid input",
            _ => "Internal server error",
        };
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_client_error() {
        let err = LabelStubError::InvalidInput("expected array".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid input: expected array");
    }

    #[test]
    fn test_invalid_config_joins_messages() {
        let err = LabelStubError::InvalidConfig(vec![
            "model.labels must be at least 1".to_string(),
            "server.port must be non-zero".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid configuration: model.labels must be at least 1; server.port must be non-zero"
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_input_response_is_plain_text() {
        let response = LabelStubError::InvalidInput("eof".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
