//! Dashboard statistics — the pure half of the aggregation engine.
//!
//! The store computes the raw aggregates in one SQL pass
//! ([`crate::store::RatingStats`]); this module shapes them into the wire
//! contract. Stats are recomputed on every request, never cached.

use serde::Serialize;

use crate::store::RatingStats;

/// The `/api/dashboard/stats` payload.
///
/// With zero rows the SQL aggregates come back NULL; those are coerced to 0
/// on the wire. A zero average therefore means "no data", not "rating of
/// zero" — ratings start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardStats {
  #[serde(rename = "totalFeedback")]
  pub total_feedback: i64,
  #[serde(rename = "averageRating")]
  pub average_rating: f64,
  #[serde(rename = "highestRating")]
  pub highest_rating: i64,
  #[serde(rename = "lowestRating")]
  pub lowest_rating:  i64,
  #[serde(rename = "totalCourses")]
  pub total_courses:  i64,
}

impl From<RatingStats> for DashboardStats {
  fn from(raw: RatingStats) -> Self {
    DashboardStats {
      total_feedback: raw.total,
      average_rating: round2(raw.average.unwrap_or(0.0)),
      highest_rating: raw.highest.unwrap_or(0),
      lowest_rating:  raw.lowest.unwrap_or(0),
      total_courses:  raw.courses,
    }
  }
}

/// Round to 2 decimal places.
fn round2(x: f64) -> f64 { (x * 100.0).round() / 100.0 }
