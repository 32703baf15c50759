//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::BytesRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use todo_core::{ValidationError, item::TodoId};

/// The store operation a handler was performing when the backend failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
  Add,
  Update,
}

impl StoreOperation {
  /// The message returned to callers; never includes backend detail.
  pub fn failure_message(self) -> &'static str {
    match self {
      Self::Add => "Failed to add todo item",
      Self::Update => "Failed to update todo item",
    }
  }
}

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("unreadable request body: {0}")]
  Body(#[from] BytesRejection),

  #[error("todo item {0} not found")]
  NotFound(TodoId),

  #[error("{}: {source}", operation.failure_message())]
  Store {
    operation: StoreOperation,
    #[source]
    source:    Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  pub fn store<E>(operation: StoreOperation, source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store { operation, source: Box::new(source) }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Validation(e) => {
        tracing::debug!(error = %e, "rejected request");
        (StatusCode::BAD_REQUEST, e.to_string())
      }
      ApiError::Body(rejection) => {
        tracing::debug!(error = %rejection, "rejected request body");
        let status = rejection.status();
        let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
          "Request body too large"
        } else {
          "Invalid request body"
        };
        (status, message.to_owned())
      }
      ApiError::NotFound(id) => {
        tracing::debug!(id, "todo item not found");
        (StatusCode::NOT_FOUND, "Todo item not found".to_owned())
      }
      ApiError::Store { operation, source } => {
        tracing::error!(error = %source, "{}", operation.failure_message());
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          operation.failure_message().to_owned(),
        )
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
