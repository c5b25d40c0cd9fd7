//! The validation engine: pure checks on a candidate submission.
//!
//! Validation runs entirely before any persistence attempt. Missing fields
//! are one combined outcome (reported with the full `required` list); field
//! rules are then all evaluated — not short-circuited — so every violation
//! can be reported together.

use serde::Deserialize;
use thiserror::Error;

use crate::feedback::NewFeedback;

/// Wire names of the four required fields, in submission order.
pub const REQUIRED_FIELDS: [&str; 4] =
  ["studentName", "courseCode", "comments", "rating"];

// ─── Input ───────────────────────────────────────────────────────────────────

/// A rating as clients actually send it: integer, float, or string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
  Int(i64),
  Float(f64),
  Text(String),
}

impl RatingInput {
  /// The integer value, if this input cleanly represents one.
  ///
  /// Floats only qualify when integral: `4.0` parses, `3.7` does not.
  fn as_integer(&self) -> Option<i64> {
    match self {
      RatingInput::Int(n) => Some(*n),
      RatingInput::Float(f) if f.fract() == 0.0 => Some(*f as i64),
      RatingInput::Float(_) => None,
      RatingInput::Text(s) => s.trim().parse().ok(),
    }
  }
}

/// A candidate submission as received in a POST body.
///
/// Every field is `Option` so absence is distinguishable from emptiness —
/// the two produce different errors.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
  #[serde(rename = "studentName")]
  pub student_name: Option<String>,
  #[serde(rename = "courseCode")]
  pub course_code:  Option<String>,
  pub comments:     Option<String>,
  pub rating:       Option<RatingInput>,
}

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// A single field rule violation, with its client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
  #[error("Rating must be a number between 1 and 5")]
  RatingOutOfRange,
  #[error("Student name cannot be empty")]
  EmptyStudentName,
  #[error("Course code cannot be empty")]
  EmptyCourseCode,
  #[error("Comments must be at least 10 characters long")]
  ShortComments,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  /// At least one of the four fields is absent from the body.
  #[error("All fields are required")]
  MissingFields,

  /// All fields present, but one or more field rules failed.
  /// The list is in field order and never empty.
  #[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
  Invalid(Vec<Violation>),
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Check `submission` against all field rules.
///
/// Returns the trimmed, parsed [`NewFeedback`] on acceptance, or every
/// violated rule on rejection.
pub fn validate(submission: Submission) -> Result<NewFeedback, ValidationError> {
  let Submission {
    student_name: Some(student_name),
    course_code: Some(course_code),
    comments: Some(comments),
    rating: Some(rating),
  } = submission
  else {
    return Err(ValidationError::MissingFields);
  };

  let mut violations = Vec::new();

  let rating = rating.as_integer().filter(|n| (1..=5).contains(n));
  if rating.is_none() {
    violations.push(Violation::RatingOutOfRange);
  }

  let student_name = student_name.trim();
  if student_name.is_empty() {
    violations.push(Violation::EmptyStudentName);
  }

  let course_code = course_code.trim();
  if course_code.is_empty() {
    violations.push(Violation::EmptyCourseCode);
  }

  let comments = comments.trim();
  // Minimum length is in characters, not UTF-8 bytes.
  if comments.chars().count() < 10 {
    violations.push(Violation::ShortComments);
  }

  if violations.is_empty()
    && let Some(rating) = rating
  {
    Ok(NewFeedback {
      student_name: student_name.to_owned(),
      course_code:  course_code.to_owned(),
      comments:     comments.to_owned(),
      rating,
    })
  } else {
    Err(ValidationError::Invalid(violations))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
