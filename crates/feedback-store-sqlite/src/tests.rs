//! Integration tests for `SqliteStore` against an in-memory database.

use feedback_core::{feedback::NewFeedback, store::FeedbackStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn entry(name: &str, course: &str, rating: i64) -> NewFeedback {
  NewFeedback {
    student_name: name.into(),
    course_code:  course.into(),
    comments:     "detailed and constructive feedback".into(),
    rating,
  }
}

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_id_and_timestamp() {
  let s = store().await;

  let row = s.insert(entry("Alice", "ICT101", 4)).await.unwrap();
  assert!(row.id >= 1);
  assert_eq!(row.student_name, "Alice");
  assert_eq!(row.course_code, "ICT101");
  assert_eq!(row.rating, 4);

  let fetched = s.get(row.id).await.unwrap().unwrap();
  assert_eq!(fetched, row);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_strictly_increase() {
  let s = store().await;
  let a = s.insert(entry("A", "ICT101", 3)).await.unwrap();
  let b = s.insert(entry("B", "ICT101", 3)).await.unwrap();
  let c = s.insert(entry("C", "ICT101", 3)).await.unwrap();
  assert!(a.id < b.id && b.id < c.id);
}

#[tokio::test]
async fn ids_not_reused_after_delete() {
  let s = store().await;
  s.insert(entry("A", "ICT101", 3)).await.unwrap();
  let b = s.insert(entry("B", "ICT101", 3)).await.unwrap();
  s.delete(b.id).await.unwrap();

  let c = s.insert(entry("C", "ICT101", 3)).await.unwrap();
  assert!(c.id > b.id);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store() {
  let s = store().await;
  assert!(s.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_orders_newest_first() {
  let s = store().await;
  let a = s.insert(entry("A", "ICT101", 3)).await.unwrap();
  let b = s.insert(entry("B", "ICT102", 4)).await.unwrap();
  let c = s.insert(entry("C", "ICT103", 5)).await.unwrap();

  // Inserts may share a timestamp; the id tie-break keeps the order total.
  let ids: Vec<i64> = s.list().await.unwrap().iter().map(|f| f.id).collect();
  assert_eq!(ids, vec![c.id, b.id, a.id]);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_returns_the_removed_row() {
  let s = store().await;
  let row = s.insert(entry("Alice", "ICT101", 4)).await.unwrap();

  let deleted = s.delete(row.id).await.unwrap().unwrap();
  assert_eq!(deleted, row);

  assert!(s.get(row.id).await.unwrap().is_none());
  assert!(s.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_returns_none() {
  let s = store().await;
  assert!(s.delete(42).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
  let s = store().await;
  let a = s.insert(entry("A", "ICT101", 3)).await.unwrap();
  let b = s.insert(entry("B", "ICT101", 4)).await.unwrap();

  s.delete(a.id).await.unwrap();

  let remaining = s.list().await.unwrap();
  assert_eq!(remaining.len(), 1);
  assert_eq!(remaining[0].id, b.id);
}

// ─── Stats ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn stats_on_empty_table_are_null_aggregates() {
  let s = store().await;
  let stats = s.stats().await.unwrap();
  assert_eq!(stats.total, 0);
  assert_eq!(stats.average, None);
  assert_eq!(stats.highest, None);
  assert_eq!(stats.lowest, None);
  assert_eq!(stats.courses, 0);
}

#[tokio::test]
async fn stats_count_distinct_courses_not_rows() {
  let s = store().await;
  s.insert(entry("A", "ICT101", 4)).await.unwrap();
  s.insert(entry("B", "ICT101", 2)).await.unwrap();

  let stats = s.stats().await.unwrap();
  assert_eq!(stats.total, 2);
  assert_eq!(stats.average, Some(3.0));
  assert_eq!(stats.highest, Some(4));
  assert_eq!(stats.lowest, Some(2));
  assert_eq!(stats.courses, 1);
}

#[tokio::test]
async fn stats_across_multiple_courses() {
  let s = store().await;
  s.insert(entry("A", "ICT101", 5)).await.unwrap();
  s.insert(entry("B", "ICT102", 3)).await.unwrap();
  s.insert(entry("C", "ICT102", 1)).await.unwrap();

  let stats = s.stats().await.unwrap();
  assert_eq!(stats.total, 3);
  assert_eq!(stats.average, Some(3.0));
  assert_eq!(stats.highest, Some(5));
  assert_eq!(stats.lowest, Some(1));
  assert_eq!(stats.courses, 2);
}
