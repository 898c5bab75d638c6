use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::SharedState;

pub async fn index(State(state): State<SharedState>) -> Result<Response, AppError> {
    let html = match tokio::fs::read_to_string(&state.config.index_path).await {
        Ok(html) => html,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound("index.html not found".to_string()));
        }
        Err(e) => return Err(AppError::Internal(format!("Failed to read index page: {e}"))),
    };

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response())
}
