use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::models::{FormSubmission, OutputReport};
use crate::state::SharedState;
use crate::submission::pipeline;

pub async fn submit_form(
    State(state): State<SharedState>,
    payload: Result<Json<FormSubmission>, JsonRejection>,
) -> Result<Json<OutputReport>, AppError> {
    let Json(form) = payload?;

    tracing::debug!(guests = form.guests.len(), "Form submitted");

    let now = chrono::Local::now().naive_local();
    let report =
        tokio::task::spawn_blocking(move || pipeline::run(&state.config, &form, now)).await??;

    Ok(Json(report))
}
