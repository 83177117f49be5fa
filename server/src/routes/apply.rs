//! Application form screen.
//!
//! Submission is simulated: a valid draft gets an acknowledgment and the
//! screen to go to next. Nothing is stored or transmitted.

use axum::{
    Json,
    extract::{Path, State},
};
use common::{ApplicationDraft, FieldErrors, Submission};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    #[serde(flatten)]
    draft: ApplicationDraft,
    /// Set when the form was opened from the saved jobs screen.
    #[serde(default)]
    from_saved_jobs: bool,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    valid: bool,
    errors: FieldErrors,
}

/// Handler for POST /apply/validate
pub async fn validate_handler(Json(draft): Json<ApplicationDraft>) -> Json<ValidateResponse> {
    Json(ValidateResponse {
        valid: draft.can_submit(),
        errors: draft.field_errors(),
    })
}

/// Handler for POST /apply/{id}
pub async fn submit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ApplyRequest>,
) -> Result<Json<Submission>, AppError> {
    let job = {
        let session = state.session();
        session
            .feed
            .find(&id)
            .or_else(|| session.saved.get(&id))
            .cloned()
    }
    .ok_or_else(|| AppError::NotFound(format!("No job with id '{id}'")))?;

    let submission = request
        .draft
        .submit(&job, request.from_saved_jobs)
        .map_err(AppError::Validation)?;

    info!(%id, title = %job.title, "application submitted");
    Ok(Json(submission))
}
