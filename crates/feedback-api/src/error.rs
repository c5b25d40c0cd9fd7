//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! The status mapping: validation problems are 400 and never touch storage,
//! a missing row is 404, and any store failure is 500 with the underlying
//! message surfaced in `details` for diagnosability.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use feedback_core::validate::{REQUIRED_FIELDS, ValidationError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Feedback not found")]
  NotFound,

  /// The path id was not numeric; storage is never queried.
  #[error("Invalid feedback ID")]
  InvalidId,

  /// The request body was not JSON, or did not match the submission shape.
  #[error("Invalid request body")]
  BadRequestBody(String),

  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("{context}: {source}")]
  Store {
    context: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  pub fn store(
    context: &'static str,
    source: impl std::error::Error + Send + Sync + 'static,
  ) -> Self {
    ApiError::Store { context, source: Box::new(source) }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound => (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "Feedback not found" })),
      )
        .into_response(),

      ApiError::InvalidId => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": "Invalid feedback ID" })),
      )
        .into_response(),

      ApiError::BadRequestBody(details) => (
        StatusCode::BAD_REQUEST,
        Json(json!({
          "success": false,
          "error":   "Invalid request body",
          "details": details,
        })),
      )
        .into_response(),

      ApiError::Validation(ValidationError::MissingFields) => (
        StatusCode::BAD_REQUEST,
        Json(json!({
          "success":  false,
          "error":    ValidationError::MissingFields.to_string(),
          "required": REQUIRED_FIELDS,
        })),
      )
        .into_response(),

      ApiError::Validation(ValidationError::Invalid(violations)) => {
        let details: Vec<String> =
          violations.iter().map(ToString::to_string).collect();
        let error = details.first().cloned().unwrap_or_default();
        (
          StatusCode::BAD_REQUEST,
          Json(json!({ "success": false, "error": error, "details": details })),
        )
          .into_response()
      }

      ApiError::Store { context, source } => {
        tracing::error!(error = %source, "{context}");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": context, "details": source.to_string() })),
        )
          .into_response()
      }
    }
  }
}
