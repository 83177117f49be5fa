//! Job list screen.

use axum::{
    Json,
    extract::{Query, State},
};
use common::{Job, filter_jobs};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::feed_controller::Completion;
use crate::state::AppState;

/// Query parameters for the job list
#[derive(Debug, Deserialize)]
pub struct ListParams {
    q: Option<String>,
}

/// A job as shown on the list, with its save button state.
#[derive(Debug, Serialize)]
pub struct JobListItem {
    #[serde(flatten)]
    job: Job,
    saved: bool,
    label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    query: String,
    loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    total_results: usize,
    jobs: Vec<JobListItem>,
}

fn render(state: &AppState, query: String) -> JobListResponse {
    let session = state.session();
    let jobs: Vec<JobListItem> = filter_jobs(session.feed.jobs(), &query)
        .into_iter()
        .map(|job| {
            let saved = session.saved.contains(&job.id);
            JobListItem {
                job,
                saved,
                label: if saved { "Saved" } else { "Save Job" },
            }
        })
        .collect();

    JobListResponse {
        query,
        loading: session.feed.is_loading(),
        error: session.feed.last_error().map(str::to_string),
        total_results: jobs.len(),
        jobs,
    }
}

/// Handler for GET /jobs?q=<title>
pub async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<JobListResponse> {
    Json(render(&state, params.q.unwrap_or_default()))
}

/// Handler for POST /jobs/refresh
pub async fn refresh_handler(
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, AppError> {
    match state.refresh().await {
        Some(Completion::Applied) => Ok(Json(render(&state, String::new()))),
        Some(Completion::Failed(e)) => Err(e.into()),
        Some(Completion::Stale) => Err(AppError::Conflict(
            "The refresh was cancelled before it finished".to_string(),
        )),
        None => Err(AppError::Conflict(
            "The job list is already refreshing".to_string(),
        )),
    }
}

/// Handler for DELETE /jobs/refresh
pub async fn cancel_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let cancelled = state.session().feed.cancel();
    Json(serde_json::json!({ "cancelled": cancelled }))
}
