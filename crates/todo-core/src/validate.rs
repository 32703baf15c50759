//! Request body validation for the two item operations.
//!
//! Bodies are parsed into an untyped [`serde_json::Value`] first so that a
//! field with the wrong JSON type produces the operation's own
//! [`ValidationError`] rather than a generic deserialisation failure.

use serde_json::{Map, Value};

use crate::{
  ValidationError,
  item::{NewTodoItem, TodoId, TodoText},
};

/// A validated `CreateItem` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemInput {
  pub text: TodoText,
}

impl CreateItemInput {
  /// Expects `{"text": "<non-empty string>"}`; other fields are ignored.
  pub fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
    let text = parse_object(body)
      .and_then(|mut obj| obj.remove("text"))
      .and_then(|v| match v {
        Value::String(s) => Some(s),
        _ => None,
      })
      .ok_or(ValidationError::TextRequired)?;

    Ok(Self { text: TodoText::new(text)? })
  }
}

impl From<CreateItemInput> for NewTodoItem {
  fn from(input: CreateItemInput) -> Self { NewTodoItem::new(input.text) }
}

/// A validated `CompleteItem` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteItemInput {
  pub id: TodoId,
}

impl CompleteItemInput {
  /// Expects `{"id": <positive integer>}`; other fields are ignored.
  pub fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
    let id = parse_object(body)
      .as_ref()
      .and_then(|obj| obj.get("id"))
      .and_then(Value::as_i64)
      .filter(|id| *id > 0)
      .ok_or(ValidationError::IdRequired)?;

    Ok(Self { id })
  }
}

/// Parse `body` as a JSON object; anything else yields `None`.
fn parse_object(body: &[u8]) -> Option<Map<String, Value>> {
  match serde_json::from_slice(body).ok()? {
    Value::Object(obj) => Some(obj),
    _ => None,
  }
}
