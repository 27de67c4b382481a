use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire-level error codes, serialized as SCREAMING_SNAKE_CASE.
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    #[error("Validation failed")]
    ValidationError,
    #[error("Resource not found")]
    NotFound,
    #[error("Vote already cast")]
    AlreadyVoted,
    #[error("Vote not found")]
    VoteNotFound,
    #[error("Not authorized")]
    Unauthorized,
    #[error("Internal system error")]
    InternalError,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
