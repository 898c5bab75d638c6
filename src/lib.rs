pub mod config;
pub mod error;
pub mod state;
pub mod models;
pub mod money;
pub mod routes;
pub mod submission;
pub mod workbook;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::submission::output::REPORTS_ROUTE;

pub fn build_app(config: Config) -> Router {
    let reports = ServeDir::new(&config.reports_dir);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { config });

    Router::new()
        .merge(routes::api_routes())
        .merge(routes::page_routes())
        .nest_service(REPORTS_ROUTE, reports)
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(CorsLayer::very_permissive())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
