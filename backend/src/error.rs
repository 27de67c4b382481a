use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::error::ErrorCode;
use shared::models::ApiResponse;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Feature not found")]
    FeatureNotFound,
    #[error("Vote not found for this user and feature")]
    VoteNotFound,
    #[error("User has already voted for this feature")]
    AlreadyVoted,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::Validation(_) => ErrorCode::ValidationError,
            ApiError::FeatureNotFound => ErrorCode::NotFound,
            ApiError::VoteNotFound => ErrorCode::VoteNotFound,
            ApiError::AlreadyVoted => ErrorCode::AlreadyVoted,
            ApiError::Internal(_) => ErrorCode::InternalError,
        }
    }

    fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::FeatureNotFound | ApiError::VoteNotFound => Status::NotFound,
            ApiError::AlreadyVoted => Status::Conflict,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    /// Store detail stays in the logs; the wire gets a generic message.
    fn client_message(&self) -> String {
        match self {
            ApiError::Internal(detail) => {
                error!("internal error: {detail}");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<shared::validation::ValidationError> for ApiError {
    fn from(e: shared::validation::ValidationError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let body = Json(ApiResponse::<()>::err(self.code(), self.client_message()));

        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}
