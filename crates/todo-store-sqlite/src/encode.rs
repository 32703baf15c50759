//! Conversions between domain types and the values stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings.

use chrono::{DateTime, Utc};
use todo_core::item::{TodoId, TodoItem};

use crate::{Error, Result};

/// Column list shared by every statement that returns a whole row.
pub const ITEM_COLUMNS: &str = "id, text, completed, createdAt";

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

/// A `TodoItems` row as read from SQLite, before timestamp decoding.
pub struct RawTodoItem {
  pub id:         TodoId,
  pub text:       String,
  pub completed:  bool,
  pub created_at: String,
}

impl RawTodoItem {
  /// Read a row selected with [`ITEM_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      text:       row.get(1)?,
      completed:  row.get(2)?,
      created_at: row.get(3)?,
    })
  }

  pub fn into_item(self) -> Result<TodoItem> {
    Ok(TodoItem {
      id:         self.id,
      text:       self.text,
      completed:  self.completed,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
