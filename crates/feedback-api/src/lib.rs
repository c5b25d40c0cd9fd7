//! JSON REST API for the course-feedback service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`feedback_core::store::FeedbackStore`]. Each request is handled
//! independently; the only shared resource is the store handle, which
//! serializes conflicting writes itself.

pub mod dashboard;
pub mod error;
pub mod feedback;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Json, Router,
  http::{StatusCode, Uri},
  response::IntoResponse,
  routing::get,
};
use feedback_core::store::FeedbackStore;
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and/or
/// `FEEDBACK_*` environment variables. Every field has a documented default.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }
fn default_store_path() -> PathBuf { PathBuf::from("feedback.db") }

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for `store`.
///
/// The returned `Router<()>` owns the whole HTTP surface, including the
/// root endpoint listing and the catch-all JSON 404.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: FeedbackStore + 'static,
{
  Router::new()
    .route("/", get(root))
    .route(
      "/api/feedback",
      get(feedback::list::<S>).post(feedback::create::<S>),
    )
    .route(
      "/api/feedback/{id}",
      get(feedback::get_one::<S>).delete(feedback::delete_one::<S>),
    )
    .route("/api/dashboard/stats", get(dashboard::stats::<S>))
    .fallback(not_found)
    .with_state(store)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}

/// `GET /` — a human-readable listing of the available endpoints.
async fn root() -> Json<serde_json::Value> {
  Json(json!({
    "message": "Course Feedback API is running!",
    "endpoints": {
      "GET /api/feedback":        "Get all feedback",
      "GET /api/feedback/:id":    "Get single feedback",
      "POST /api/feedback":       "Add new feedback",
      "DELETE /api/feedback/:id": "Delete feedback",
      "GET /api/dashboard/stats": "Get dashboard statistics",
    },
  }))
}

/// Catch-all for unmatched routes.
async fn not_found(uri: Uri) -> impl IntoResponse {
  (
    StatusCode::NOT_FOUND,
    Json(json!({
      "success": false,
      "error":   "Endpoint not found",
      "path":    uri.path(),
    })),
  )
}

// ─── Integration tests ────────────────────────────────────────────────────────
