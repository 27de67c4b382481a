use rocket::{catch, serde::json::Json, Request};
use shared::error::ErrorCode;
use shared::models::ApiResponse;

// Fallbacks for errors raised outside the handlers; routed errors carry
// their own envelope via the ApiError responder.

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::err(
        ErrorCode::ValidationError,
        "Invalid request parameters",
    ))
}

#[catch(401)]
pub fn unauthorized(_req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::err(
        ErrorCode::Unauthorized,
        "A valid API key is required",
    ))
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::err(
        ErrorCode::NotFound,
        "The requested resource was not found",
    ))
}

#[catch(422)]
pub fn unprocessable(_req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::err(
        ErrorCode::ValidationError,
        "Request body could not be processed",
    ))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::err(
        ErrorCode::InternalError,
        "An internal server error occurred",
    ))
}
