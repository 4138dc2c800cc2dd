// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: reqwest::Error conversion is handled in infra-http crate
// by converting to AppError::Transport(String)

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_domain_error_converts() {
        let err: AppError = DomainError::FeedbackAlreadySubmitted.into();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::FeedbackAlreadySubmitted)
        ));
    }

    #[test]
    fn test_status_message_names_url() {
        let err = AppError::Status {
            status: 503,
            url: "http://localhost:8000/api/jobs".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected HTTP status 503 from http://localhost:8000/api/jobs"
        );
    }
}
