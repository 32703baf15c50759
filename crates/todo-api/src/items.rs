//! Handlers for the `/item` endpoint.
//!
//! | Method   | Path    | Notes |
//! |----------|---------|-------|
//! | `POST`   | `/item` | Body: `{"text":"..."}`; returns 201 + created item |
//! | `DELETE` | `/item` | Body: `{"id":1}`; marks the item completed, returns 200 + item |
//!
//! Bodies are taken as raw bytes and validated by `todo_core::validate`, so a
//! missing field, a wrong JSON type and an unparseable body all produce the
//! same 400 response. A body that cannot be read at all (for instance one
//! over [`crate::MAX_BODY_BYTES`]) is reported through [`ApiError::Body`].

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::BytesRejection},
  http::StatusCode,
  response::IntoResponse,
};
use bytes::Bytes;
use todo_core::{
  item::TodoItem,
  store::TodoStore,
  validate::{CompleteItemInput, CreateItemInput},
};

use crate::error::{ApiError, StoreOperation};

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /item` — returns 201 + the stored [`TodoItem`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TodoStore,
{
  let body = body?;
  let input = CreateItemInput::from_body(&body)?;
  let item = store
    .insert_item(input.into())
    .await
    .map_err(|e| ApiError::store(StoreOperation::Add, e))?;

  tracing::info!(id = item.id, "todo item created");
  Ok((StatusCode::CREATED, Json(item)))
}

// ─── Complete ─────────────────────────────────────────────────────────────────

/// `DELETE /item` — marks the item completed.
///
/// An item that is already completed is returned unchanged with 200.
pub async fn complete<S>(
  State(store): State<Arc<S>>,
  body: Result<Bytes, BytesRejection>,
) -> Result<Json<TodoItem>, ApiError>
where
  S: TodoStore,
{
  let body = body?;
  let CompleteItemInput { id } = CompleteItemInput::from_body(&body)?;
  let item = store
    .complete_item(id)
    .await
    .map_err(|e| ApiError::store(StoreOperation::Update, e))?
    .ok_or(ApiError::NotFound(id))?;

  tracing::info!(id, "todo item completed");
  Ok(Json(item))
}
