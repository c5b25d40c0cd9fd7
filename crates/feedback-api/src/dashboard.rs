//! Handler for `/api/dashboard/stats`.

use std::sync::Arc;

use axum::{Json, extract::State};
use feedback_core::{stats::DashboardStats, store::FeedbackStore};
use serde_json::json;

use crate::error::ApiError;

/// `GET /api/dashboard/stats`
///
/// Aggregates are recomputed over the full table on every request.
pub async fn stats<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: FeedbackStore,
{
  let raw = store
    .stats()
    .await
    .map_err(|e| ApiError::store("Failed to retrieve statistics", e))?;

  Ok(Json(json!({
    "success": true,
    "data":    DashboardStats::from(raw),
  })))
}
