// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error on {field}: {message}")]
    Validation { field: String, message: String },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("article {id} is already published")]
    AlreadyPublished { id: String },
    #[error("invalid status: current {current}, expected {expected}")]
    InvalidStatus { current: String, expected: String },
    #[error("reply depth exceeds the maximum of {max}")]
    ReplyDepthExceeded { max: u32 },
    #[error("content was flagged as spam")]
    SpamDetected,
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_status(current: impl ToString, expected: impl Into<String>) -> Self {
        Self::InvalidStatus {
            current: current.to_string(),
            expected: expected.into(),
        }
    }
}
