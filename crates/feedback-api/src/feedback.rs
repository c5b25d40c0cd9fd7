//! Handlers for `/api/feedback` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/api/feedback` | All rows, newest first |
//! | `GET`    | `/api/feedback/:id` | 400 non-numeric id, 404 if not found |
//! | `POST`   | `/api/feedback` | Validated body; 201 + stored row |
//! | `DELETE` | `/api/feedback/:id` | 400 non-numeric id, 404 if not found |
//!
//! Extractor failures are mapped into [`ApiError`] so every error response
//! keeps the JSON envelope — axum's plain-text rejections never reach the
//! wire.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use feedback_core::{store::FeedbackStore, validate};
use serde_json::json;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /api/feedback`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: FeedbackStore,
{
  let rows = store
    .list()
    .await
    .map_err(|e| ApiError::store("Failed to retrieve feedback", e))?;

  Ok(Json(json!({
    "success": true,
    "count":   rows.len(),
    "data":    rows,
  })))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /api/feedback/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: FeedbackStore,
{
  let id: i64 = id.parse().map_err(|_| ApiError::InvalidId)?;

  let row = store
    .get(id)
    .await
    .map_err(|e| ApiError::store("Failed to retrieve feedback", e))?
    .ok_or(ApiError::NotFound)?;

  Ok(Json(json!({ "success": true, "data": row })))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /api/feedback` — body is a raw [`validate::Submission`].
///
/// Validation runs before any store call; a rejected submission never
/// produces a partial write. The `Json` rejection is taken as a `Result`
/// so malformed or type-mismatched bodies get the 400 envelope too.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<validate::Submission>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FeedbackStore,
{
  let Json(body) = body.map_err(|e| ApiError::BadRequestBody(e.body_text()))?;
  let accepted = validate::validate(body)?;

  let row = store
    .insert(accepted)
    .await
    .map_err(|e| ApiError::store("Failed to add feedback", e))?;

  Ok((
    StatusCode::CREATED,
    Json(json!({
      "success": true,
      "message": "Feedback submitted successfully",
      "data":    row,
    })),
  ))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /api/feedback/:id`
///
/// The id is taken as a raw path segment so a non-numeric value can be
/// rejected with 400 before storage is ever queried.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: FeedbackStore,
{
  let id: i64 = id.parse().map_err(|_| ApiError::InvalidId)?;

  let deleted = store
    .delete(id)
    .await
    .map_err(|e| ApiError::store("Failed to delete feedback", e))?
    .ok_or(ApiError::NotFound)?;

  Ok(Json(json!({
    "success":   true,
    "message":   "Feedback deleted successfully",
    "deletedId": deleted.id,
  })))
}
