use std::collections::HashSet;

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::{self, Json};
use rocket::{delete, get, post, State};
use sqlx::PgPool;
use tracing::instrument;

use shared::models::{ApiResponse, VoteRecord, VoteRequest, VoteStatus, WithdrawAck};
use shared::validation::{parse_feature_id, parse_user_uuid};

use crate::auth::ApiKey;
use crate::engine::VoteEngine;
use crate::error::ApiError;

pub struct AppState {
    pub db: PgPool,
    pub api_keys: HashSet<String>,
}

impl AppState {
    pub fn new(pool: PgPool, api_keys: HashSet<String>) -> Self {
        Self { db: pool, api_keys }
    }
}

fn parse_body(body: Result<Json<VoteRequest>, json::Error<'_>>) -> Result<VoteRequest, ApiError> {
    body.map(Json::into_inner).map_err(|e| match e {
        json::Error::Parse(_, e) => ApiError::Validation(format!("invalid request body: {e}")),
        json::Error::Io(_) => ApiError::Validation("invalid request body".into()),
    })
}

#[instrument(skip(state, request, _key))]
#[post("/features/<feature_id>/vote", format = "json", data = "<request>")]
pub async fn cast_vote(
    state: &State<AppState>,
    feature_id: &str,
    request: Result<Json<VoteRequest>, json::Error<'_>>,
    _key: ApiKey,
) -> Result<Custom<Json<ApiResponse<VoteRecord>>>, ApiError> {
    let request = parse_body(request)?;
    let feature_id = parse_feature_id(feature_id)?;
    let user_uuid = parse_user_uuid(&request.user_uuid)?;

    let record = VoteEngine::cast(&state.db, feature_id, user_uuid).await?;
    Ok(Custom(Status::Created, Json(ApiResponse::ok(record))))
}

#[instrument(skip(state, request, _key))]
#[delete("/features/<feature_id>/vote", format = "json", data = "<request>")]
pub async fn withdraw_vote(
    state: &State<AppState>,
    feature_id: &str,
    request: Result<Json<VoteRequest>, json::Error<'_>>,
    _key: ApiKey,
) -> Result<Json<ApiResponse<WithdrawAck>>, ApiError> {
    let request = parse_body(request)?;
    let feature_id = parse_feature_id(feature_id)?;
    let user_uuid = parse_user_uuid(&request.user_uuid)?;

    VoteEngine::withdraw(&state.db, feature_id, user_uuid).await?;
    Ok(Json(ApiResponse::ok(WithdrawAck {
        message: "Vote withdrawn".into(),
    })))
}

#[instrument(skip(state, _key))]
#[get("/features/<feature_id>/vote/<user_uuid>")]
pub async fn vote_status(
    state: &State<AppState>,
    feature_id: &str,
    user_uuid: &str,
    _key: ApiKey,
) -> Result<Json<ApiResponse<VoteStatus>>, ApiError> {
    let feature_id = parse_feature_id(feature_id)?;
    let user_uuid = parse_user_uuid(user_uuid)?;

    let status = VoteEngine::status(&state.db, feature_id, user_uuid).await?;
    Ok(Json(ApiResponse::ok(status)))
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
