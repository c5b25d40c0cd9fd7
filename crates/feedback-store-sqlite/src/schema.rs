//! SQL schema for the SQLite feedback store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps ids strictly increasing and never reused after a
/// delete. The rating CHECK is a backstop; the real enforcement happens in
/// the validation engine before any insert is attempted.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS feedback (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    studentname TEXT    NOT NULL,
    coursecode  TEXT    NOT NULL,
    comments    TEXT    NOT NULL,
    rating      INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
    created_at  TEXT    NOT NULL   -- ISO 8601 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS feedback_created_idx ON feedback(created_at);
CREATE INDEX IF NOT EXISTS feedback_course_idx  ON feedback(coursecode);

PRAGMA user_version = 1;
";
