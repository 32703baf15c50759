//! [`SqliteStore`] — the SQLite implementation of [`TodoStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use todo_core::{
  item::{NewTodoItem, TodoId, TodoItem},
  store::TodoStore,
};

use crate::{
  Error, Result,
  encode::{ITEM_COLUMNS, RawTodoItem, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A todo store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "opened sqlite todo store");
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
}

// ─── TodoStore impl ──────────────────────────────────────────────────────────

impl TodoStore for SqliteStore {
  type Error = Error;

  async fn insert_item(&self, item: NewTodoItem) -> Result<TodoItem> {
    let text   = item.text.into_inner();
    let at_str = encode_dt(Utc::now());

    let raw: RawTodoItem = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &format!(
            "INSERT INTO TodoItems (text, completed, createdAt)
             VALUES (?1, false, ?2)
             RETURNING {ITEM_COLUMNS}"
          ),
          rusqlite::params![text, at_str],
          RawTodoItem::from_row,
        )?)
      })
      .await?;

    raw.into_item()
  }

  async fn complete_item(&self, id: TodoId) -> Result<Option<TodoItem>> {
    // Matches on id alone, so an already-completed row is still returned.
    let raw: Option<RawTodoItem> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "UPDATE TodoItems SET completed = true
               WHERE id = ?1
               RETURNING {ITEM_COLUMNS}"
            ),
            rusqlite::params![id],
            RawTodoItem::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawTodoItem::into_item).transpose()
  }

  async fn get_item(&self, id: TodoId) -> Result<Option<TodoItem>> {
    let raw: Option<RawTodoItem> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {ITEM_COLUMNS} FROM TodoItems WHERE id = ?1"),
            rusqlite::params![id],
            RawTodoItem::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawTodoItem::into_item).transpose()
  }
}
