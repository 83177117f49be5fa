pub mod apply;
pub mod jobs;
pub mod saved;

use axum::{
    Json, Router,
    routing::{delete, get, post},
};
use serde_json::{Value, json};

use crate::state::AppState;

/// Handler for GET / (root)
async fn root_handler() -> &'static str {
    "💼 Job Finder API\n\nEndpoints:\n  GET    /jobs?q=<title>       - Job list, filtered by title\n  POST   /jobs/refresh         - Reload the job feed\n  DELETE /jobs/refresh         - Leave the job list (drop an outstanding reload)\n  GET    /saved                - Saved jobs\n  POST   /saved/{id}           - Save a job\n  DELETE /saved/{id}           - Remove a saved job\n  POST   /apply/validate       - Check an application draft\n  POST   /apply/{id}           - Submit an application\n\nExample:\n  curl 'http://127.0.0.1:3000/jobs?q=engineer'"
}

/// Handler for GET /health
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "job-finder"
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        // Job list screen
        .route("/jobs", get(jobs::list_handler))
        .route(
            "/jobs/refresh",
            post(jobs::refresh_handler).delete(jobs::cancel_handler),
        )
        // Saved jobs screen
        .route("/saved", get(saved::list_handler))
        .route(
            "/saved/{id}",
            post(saved::save_handler).delete(saved::remove_handler),
        )
        // Application form screen
        .route("/apply/validate", post(apply::validate_handler))
        .route("/apply/{id}", post(apply::submit_handler))
        .with_state(state)
}
