use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::models::TemplateOptions;
use crate::state::SharedState;
use crate::submission::pipeline;

pub async fn get_options(
    State(state): State<SharedState>,
) -> Result<Json<TemplateOptions>, AppError> {
    let options =
        tokio::task::spawn_blocking(move || pipeline::load_options(&state.config)).await??;
    Ok(Json(options))
}
