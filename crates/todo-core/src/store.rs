//! The `TodoStore` trait.
//!
//! Implemented by storage backends (`todo-store-sqlite`, and
//! [`crate::memory::MemoryStore`]). The API crate depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::item::{NewTodoItem, TodoId, TodoItem};

/// Abstraction over a todo item store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TodoStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new item. The store assigns `id` and `created_at`; the item
  /// starts incomplete.
  fn insert_item(
    &self,
    item: NewTodoItem,
  ) -> impl Future<Output = Result<TodoItem, Self::Error>> + Send + '_;

  /// Mark the item with `id` as completed and return it.
  ///
  /// Returns `None` (and changes nothing) if no such item exists. Completing
  /// an already-completed item succeeds and returns it unchanged.
  fn complete_item(
    &self,
    id: TodoId,
  ) -> impl Future<Output = Result<Option<TodoItem>, Self::Error>> + Send + '_;

  /// Retrieve an item by id. Returns `None` if not found.
  fn get_item(
    &self,
    id: TodoId,
  ) -> impl Future<Output = Result<Option<TodoItem>, Self::Error>> + Send + '_;
}
