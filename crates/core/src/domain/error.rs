// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid quality rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    #[error("Feedback already submitted")]
    FeedbackAlreadySubmitted,

    #[error("Invalid route transition: {from} -> {to}")]
    InvalidRouteTransition { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
