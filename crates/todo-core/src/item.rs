//! The todo item — the single entity of the service.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Store-assigned identifier. Ids start at 1 and are never reused.
pub type TodoId = i64;

// ─── TodoText ────────────────────────────────────────────────────────────────

/// The text of a todo item; guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoText(String);

impl TodoText {
  /// Accepts any non-empty string, including whitespace-only ones.
  pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
    let text = text.into();
    if text.is_empty() {
      return Err(ValidationError::TextRequired);
    }
    Ok(Self(text))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn into_inner(self) -> String { self.0 }
}

impl fmt::Display for TodoText {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── TodoItem ────────────────────────────────────────────────────────────────

/// A persisted todo item.
///
/// `id`, `text` and `created_at` never change after creation. `completed`
/// only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
  pub id:         TodoId,
  pub text:       String,
  pub completed:  bool,
  /// Server-assigned timestamp.
  pub created_at: DateTime<Utc>,
}

impl TodoItem {
  /// Materialise a freshly inserted item. Every item starts incomplete.
  pub fn created(id: TodoId, new: NewTodoItem, created_at: DateTime<Utc>) -> Self {
    Self {
      id,
      text: new.text.into_inner(),
      completed: false,
      created_at,
    }
  }
}

// ─── NewTodoItem ─────────────────────────────────────────────────────────────

/// Input to [`crate::store::TodoStore::insert_item`].
/// `id`, `created_at` and `completed` are set by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
  pub text: TodoText,
}

impl NewTodoItem {
  pub fn new(text: TodoText) -> Self { Self { text } }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn empty_text_is_rejected() {
    assert_eq!(TodoText::new(""), Err(ValidationError::TextRequired));
  }

  #[test]
  fn whitespace_text_is_accepted() {
    let text = TodoText::new("  ").unwrap();
    assert_eq!(text.as_str(), "  ");
  }

  #[test]
  fn item_serialises_with_camel_case_timestamp() {
    let created_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let item = TodoItem::created(
      7,
      NewTodoItem::new(TodoText::new("buy milk").unwrap()),
      created_at,
    );

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["text"], "buy milk");
    assert_eq!(json["completed"], false);
    assert_eq!(json["createdAt"], "2026-01-02T03:04:05Z");
    assert!(json.get("created_at").is_none());
  }
}
