use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use tracing::debug;

use crate::routes::AppState;

/// Request guard standing in for the API-key authorizer: every route runs
/// behind it, the engine itself never sees unauthorized requests. An empty
/// key set disables the check (announced at startup).
pub struct ApiKey(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ApiKey {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(state) = req.rocket().state::<AppState>() else {
            return Outcome::Error((Status::InternalServerError, ()));
        };

        if state.api_keys.is_empty() {
            return Outcome::Success(ApiKey(String::new()));
        }

        match req.headers().get_one("X-API-Key") {
            Some(key) if state.api_keys.contains(key) => Outcome::Success(ApiKey(key.to_string())),
            _ => {
                debug!("request rejected: missing or unknown API key");
                Outcome::Error((Status::Unauthorized, ()))
            }
        }
    }
}
