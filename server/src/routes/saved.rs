//! Saved jobs screen.

use axum::{
    Json,
    extract::{Path, State},
};
use common::Job;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

pub const EMPTY_MESSAGE: &str = "No saved jobs yet.";
pub const REMOVED_MESSAGE: &str = "This job has been removed from your saved list.";

#[derive(Debug, Serialize)]
pub struct SavedListResponse {
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    saved: bool,
    inserted: bool,
    label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    removed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Handler for GET /saved
pub async fn list_handler(State(state): State<AppState>) -> Json<SavedListResponse> {
    let session = state.session();
    let jobs = session.saved.list().to_vec();
    Json(SavedListResponse {
        total: jobs.len(),
        message: jobs.is_empty().then_some(EMPTY_MESSAGE),
        jobs,
    })
}

/// Handler for POST /saved/{id}
pub async fn save_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SaveResponse>, AppError> {
    let mut session = state.session();
    let job = session
        .feed
        .find(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No job with id '{id}' in the job list")))?;

    let inserted = session.saved.save(job);
    if inserted {
        info!(%id, total = session.saved.len(), "job saved");
    }
    Ok(Json(SaveResponse {
        saved: true,
        inserted,
        label: "Saved",
    }))
}

/// Handler for DELETE /saved/{id}
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<RemoveResponse> {
    let removed = state.session().saved.remove(&id);
    if removed {
        info!(%id, "job removed from saved list");
    }
    Json(RemoveResponse {
        removed,
        message: removed.then_some(REMOVED_MESSAGE),
    })
}
