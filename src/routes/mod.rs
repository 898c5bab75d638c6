pub mod index;
pub mod options;
pub mod submit;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/options", get(options::get_options))
        .route("/api/submit", post(submit::submit_form))
}

pub fn page_routes() -> Router<SharedState> {
    Router::new().route("/", get(index::index))
}
