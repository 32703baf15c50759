//! Integration tests for `SqliteStore` against an in-memory database.

use todo_core::{
  item::{NewTodoItem, TodoText},
  store::TodoStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_item(text: &str) -> NewTodoItem {
  NewTodoItem::new(TodoText::new(text).unwrap())
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_id_and_defaults() {
  let s = store().await;

  let item = s.insert_item(new_item("buy milk")).await.unwrap();
  assert_eq!(item.id, 1);
  assert_eq!(item.text, "buy milk");
  assert!(!item.completed);

  let fetched = s.get_item(item.id).await.unwrap().unwrap();
  assert_eq!(fetched, item);
}

#[tokio::test]
async fn insert_ids_are_unique_and_increasing() {
  let s = store().await;

  let a = s.insert_item(new_item("a")).await.unwrap();
  let b = s.insert_item(new_item("b")).await.unwrap();
  let c = s.insert_item(new_item("c")).await.unwrap();
  assert!(a.id < b.id && b.id < c.id);
}

#[tokio::test]
async fn insert_keeps_text_verbatim() {
  let s = store().await;
  let text = "  émoji ✅ and 'quotes' ";

  let item = s.insert_item(new_item(text)).await.unwrap();
  assert_eq!(item.text, text);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get_item(1).await.unwrap().is_none());
}

// ─── Complete ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn complete_sets_flag_and_keeps_other_fields() {
  let s = store().await;
  let created = s.insert_item(new_item("buy milk")).await.unwrap();

  let completed = s.complete_item(created.id).await.unwrap().unwrap();
  assert!(completed.completed);
  assert_eq!(completed.id, created.id);
  assert_eq!(completed.text, created.text);
  assert_eq!(completed.created_at, created.created_at);

  let fetched = s.get_item(created.id).await.unwrap().unwrap();
  assert!(fetched.completed);
}

#[tokio::test]
async fn complete_only_touches_matching_row() {
  let s = store().await;
  let a = s.insert_item(new_item("a")).await.unwrap();
  let b = s.insert_item(new_item("b")).await.unwrap();

  s.complete_item(b.id).await.unwrap();

  assert!(!s.get_item(a.id).await.unwrap().unwrap().completed);
  assert!(s.get_item(b.id).await.unwrap().unwrap().completed);
}

#[tokio::test]
async fn complete_missing_returns_none() {
  let s = store().await;
  let a = s.insert_item(new_item("a")).await.unwrap();

  assert!(s.complete_item(a.id + 100).await.unwrap().is_none());
  assert!(!s.get_item(a.id).await.unwrap().unwrap().completed);
}

#[tokio::test]
async fn complete_twice_returns_item_both_times() {
  let s = store().await;
  let created = s.insert_item(new_item("a")).await.unwrap();

  let first = s.complete_item(created.id).await.unwrap().unwrap();
  let second = s.complete_item(created.id).await.unwrap().unwrap();
  assert_eq!(first, second);
  assert!(second.completed);
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_file_keeps_items_and_id_sequence() {
  let dir = tempfile::TempDir::new().unwrap();
  let path = dir.path().join("todo.db");

  let first = {
    let s = SqliteStore::open(&path).await.unwrap();
    let item = s.insert_item(new_item("persist me")).await.unwrap();
    s.complete_item(item.id).await.unwrap();
    item
  };

  let s = SqliteStore::open(&path).await.unwrap();
  let fetched = s.get_item(first.id).await.unwrap().unwrap();
  assert_eq!(fetched.text, "persist me");
  assert!(fetched.completed);

  let next = s.insert_item(new_item("next")).await.unwrap();
  assert!(next.id > first.id);
}
