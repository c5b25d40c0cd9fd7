//! Feedback — the sole entity of the service.
//!
//! A feedback row is immutable once written: there is no edit operation,
//! only create and delete. The store assigns `id` and `created_at`.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted feedback row, in the shape the API exposes.
///
/// The store's columns are lowercase (`studentname`, `coursecode`); the wire
/// contract is camelCase with `created_at` kept snake_case. The serde renames
/// here are that contract — clients rely on these exact key names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
  pub id:           i64,
  #[serde(rename = "studentName")]
  pub student_name: String,
  #[serde(rename = "courseCode")]
  pub course_code:  String,
  pub comments:     String,
  pub rating:       i64,
  pub created_at:   DateTime<Utc>,
}

/// A validated submission ready for insertion.
///
/// Only produced by [`crate::validate::validate`]; text fields are already
/// trimmed and `rating` is in [1,5].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
  pub student_name: String,
  pub course_code:  String,
  pub comments:     String,
  pub rating:       i64,
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn serializes_with_camel_case_contract() {
    let row = Feedback {
      id:           7,
      student_name: "Alice".into(),
      course_code:  "ICT101".into(),
      comments:     "Great course overall".into(),
      rating:       5,
      created_at:   chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    };

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["studentName"], "Alice");
    assert_eq!(value["courseCode"], "ICT101");
    assert_eq!(value["rating"], 5);
    assert!(value.get("created_at").is_some(), "created_at stays snake_case");
    assert!(value.get("student_name").is_none());
  }
}
