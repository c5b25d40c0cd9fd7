//! Encoding helpers between domain types and SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. The column names are the
//! store's lowercase convention (`studentname`, `coursecode`); the mapping
//! to the API's camelCase field names lives on the domain struct
//! ([`feedback_core::Feedback`]) — this module is the only place that knows
//! both spellings.

use chrono::{DateTime, Utc};
use feedback_core::Feedback;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list for every query that reads full feedback rows, in
/// [`RawFeedback`] field order.
pub const FEEDBACK_COLUMNS: &str =
  "id, studentname, coursecode, comments, rating, created_at";

/// Raw values read directly from a `feedback` row.
pub struct RawFeedback {
  pub id:           i64,
  pub student_name: String,
  pub course_code:  String,
  pub comments:     String,
  pub rating:       i64,
  pub created_at:   String,
}

/// Row mapper matching [`FEEDBACK_COLUMNS`].
pub fn feedback_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawFeedback> {
  Ok(RawFeedback {
    id:           row.get(0)?,
    student_name: row.get(1)?,
    course_code:  row.get(2)?,
    comments:     row.get(3)?,
    rating:       row.get(4)?,
    created_at:   row.get(5)?,
  })
}

impl RawFeedback {
  pub fn into_feedback(self) -> Result<Feedback> {
    Ok(Feedback {
      id:           self.id,
      student_name: self.student_name,
      course_code:  self.course_code,
      comments:     self.comments,
      rating:       self.rating,
      created_at:   decode_dt(&self.created_at)?,
    })
  }
}
