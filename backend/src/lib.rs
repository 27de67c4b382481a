pub mod auth;
pub mod catchers;
pub mod config;
pub mod cors;
pub mod db;
pub mod engine;
pub mod error;
pub mod routes;

use rocket::{catchers as rocket_catchers, routes as rocket_routes, Build, Rocket};

use crate::catchers::{bad_request, internal_error, not_found, unauthorized, unprocessable};
use crate::cors::CORS;
use crate::routes::{all_options, cast_vote, vote_status, withdraw_vote, AppState};

/// Assembles the Rocket instance; `main` launches it, tests drive it with a
/// local client.
pub fn build_rocket(figment: rocket::figment::Figment, state: AppState) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(CORS)
        .manage(state)
        .mount(
            "/",
            rocket_routes![cast_vote, withdraw_vote, vote_status, all_options],
        )
        .register(
            "/",
            rocket_catchers![
                bad_request,
                unauthorized,
                not_found,
                unprocessable,
                internal_error
            ],
        )
}
