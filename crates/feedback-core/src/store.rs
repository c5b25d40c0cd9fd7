//! The `FeedbackStore` trait and supporting types.
//!
//! The trait is implemented by storage backends (e.g.
//! `feedback-store-sqlite`). The HTTP layer depends on this abstraction, not
//! on any concrete backend, so tests can substitute an in-memory store.

use std::future::Future;

use crate::feedback::{Feedback, NewFeedback};

// ─── Aggregate row ───────────────────────────────────────────────────────────

/// Raw aggregates over the full feedback table, as SQL produces them.
///
/// `average`, `highest`, and `lowest` are `None` when the table is empty —
/// interpretation of that is the caller's concern
/// (see [`crate::stats::DashboardStats`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingStats {
  pub total:   i64,
  pub average: Option<f64>,
  pub highest: Option<i64>,
  pub lowest:  Option<i64>,
  /// Count of distinct course codes, not of rows.
  pub courses: i64,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a feedback store backend.
///
/// Rows are never updated in place: the only mutations are insert and
/// delete. "Not found" is expressed as `Ok(None)` / row count, never as a
/// backend error — the backend reports only real failures.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait FeedbackStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All feedback, newest first (`created_at` descending, ties broken by
  /// `id` descending so the order is total).
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Feedback>, Self::Error>> + Send + '_;

  /// One row by id. Returns `None` if no row matches.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Feedback>, Self::Error>> + Send + '_;

  /// Persist a validated submission and return the stored row, including
  /// the assigned `id` and `created_at`.
  fn insert(
    &self,
    input: NewFeedback,
  ) -> impl Future<Output = Result<Feedback, Self::Error>> + Send + '_;

  /// Delete one row by id and return it, or `None` if no row matched.
  /// Ids are never reused after deletion.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Feedback>, Self::Error>> + Send + '_;

  /// Compute [`RatingStats`] over the current table in one pass.
  fn stats(
    &self,
  ) -> impl Future<Output = Result<RatingStats, Self::Error>> + Send + '_;
}
