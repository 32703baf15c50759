//! [`MemoryStore`] — an in-process [`TodoStore`] for tests and embedding.

use std::{
  collections::BTreeMap,
  convert::Infallible,
  sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::Utc;

use crate::{
  item::{NewTodoItem, TodoId, TodoItem},
  store::TodoStore,
};

#[derive(Debug)]
struct Inner {
  items:   BTreeMap<TodoId, TodoItem>,
  next_id: TodoId,
}

/// A todo store held entirely in memory. Contents are lost on drop.
#[derive(Debug)]
pub struct MemoryStore {
  inner: Mutex<Inner>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(Inner { items: BTreeMap::new(), next_id: 1 }),
    }
  }

  /// Number of stored items.
  pub fn len(&self) -> usize { self.lock().items.len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  fn lock(&self) -> MutexGuard<'_, Inner> {
    // No critical section can leave `Inner` half-updated, so a poisoned lock
    // is still consistent.
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl TodoStore for MemoryStore {
  type Error = Infallible;

  async fn insert_item(&self, item: NewTodoItem) -> Result<TodoItem, Infallible> {
    let mut inner = self.lock();
    let id = inner.next_id;
    inner.next_id += 1;

    let item = TodoItem::created(id, item, Utc::now());
    inner.items.insert(id, item.clone());
    Ok(item)
  }

  async fn complete_item(&self, id: TodoId) -> Result<Option<TodoItem>, Infallible> {
    let mut inner = self.lock();
    Ok(inner.items.get_mut(&id).map(|item| {
      item.completed = true;
      item.clone()
    }))
  }

  async fn get_item(&self, id: TodoId) -> Result<Option<TodoItem>, Infallible> {
    Ok(self.lock().items.get(&id).cloned())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::item::TodoText;

  fn new_item(text: &str) -> NewTodoItem {
    NewTodoItem::new(TodoText::new(text).unwrap())
  }

  #[tokio::test]
  async fn ids_start_at_one_and_increase() {
    let store = MemoryStore::new();
    let a = store.insert_item(new_item("a")).await.unwrap();
    let b = store.insert_item(new_item("b")).await.unwrap();
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
    assert!(!a.completed);
    assert_eq!(store.len(), 2);
  }

  #[tokio::test]
  async fn complete_sets_flag_and_keeps_other_fields() {
    let store = MemoryStore::new();
    let created = store.insert_item(new_item("buy milk")).await.unwrap();

    let completed = store.complete_item(created.id).await.unwrap().unwrap();
    assert!(completed.completed);
    assert_eq!(completed.id, created.id);
    assert_eq!(completed.text, created.text);
    assert_eq!(completed.created_at, created.created_at);

    let fetched = store.get_item(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, completed);
  }

  #[tokio::test]
  async fn complete_missing_returns_none() {
    let store = MemoryStore::new();
    store.insert_item(new_item("a")).await.unwrap();

    assert!(store.complete_item(42).await.unwrap().is_none());
    assert!(!store.get_item(1).await.unwrap().unwrap().completed);
  }

  #[tokio::test]
  async fn complete_twice_is_stable() {
    let store = MemoryStore::new();
    let created = store.insert_item(new_item("a")).await.unwrap();

    let first = store.complete_item(created.id).await.unwrap().unwrap();
    let second = store.complete_item(created.id).await.unwrap().unwrap();
    assert_eq!(first, second);
    assert!(second.completed);
  }
}
