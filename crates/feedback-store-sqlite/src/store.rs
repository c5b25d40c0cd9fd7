//! [`SqliteStore`] — the SQLite implementation of [`FeedbackStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use feedback_core::{
  feedback::{Feedback, NewFeedback},
  store::{FeedbackStore, RatingStats},
};

use crate::{
  Result,
  encode::{FEEDBACK_COLUMNS, RawFeedback, encode_dt, feedback_row},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A feedback store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted and all
/// statements are serialized onto one worker thread, so concurrent requests
/// share it safely without extra locking.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// This doubles as the startup connectivity check: if it fails, the
  /// process should not serve traffic.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Close the underlying connection. Used on graceful shutdown.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }
}

// ─── FeedbackStore impl ──────────────────────────────────────────────────────

impl FeedbackStore for SqliteStore {
  type Error = crate::Error;

  async fn list(&self) -> Result<Vec<Feedback>> {
    let raws: Vec<RawFeedback> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {FEEDBACK_COLUMNS} FROM feedback
           ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map([], feedback_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawFeedback::into_feedback).collect()
  }

  async fn get(&self, id: i64) -> Result<Option<Feedback>> {
    let raw: Option<RawFeedback> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {FEEDBACK_COLUMNS} FROM feedback WHERE id = ?1"),
              rusqlite::params![id],
              feedback_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawFeedback::into_feedback).transpose()
  }

  async fn insert(&self, input: NewFeedback) -> Result<Feedback> {
    let created_at = Utc::now();
    let at_str = encode_dt(created_at);

    let NewFeedback { student_name, course_code, comments, rating } = input;

    let (id, student_name, course_code, comments) = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO feedback (studentname, coursecode, comments, rating, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![student_name, course_code, comments, rating, at_str],
        )?;
        Ok((conn.last_insert_rowid(), student_name, course_code, comments))
      })
      .await?;

    Ok(Feedback { id, student_name, course_code, comments, rating, created_at })
  }

  async fn delete(&self, id: i64) -> Result<Option<Feedback>> {
    let raw: Option<RawFeedback> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "DELETE FROM feedback WHERE id = ?1 RETURNING {FEEDBACK_COLUMNS}"
              ),
              rusqlite::params![id],
              feedback_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawFeedback::into_feedback).transpose()
  }

  async fn stats(&self) -> Result<RatingStats> {
    let stats = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT COUNT(*), AVG(rating), MAX(rating), MIN(rating),
                  COUNT(DISTINCT coursecode)
           FROM feedback",
          [],
          |row| {
            Ok(RatingStats {
              total:   row.get(0)?,
              average: row.get(1)?,
              highest: row.get(2)?,
              lowest:  row.get(3)?,
              courses: row.get(4)?,
            })
          },
        )?)
      })
      .await?;

    Ok(stats)
  }
}
