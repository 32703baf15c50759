//! JSON HTTP API for the todo service.
//!
//! Exposes an axum [`Router`] backed by any [`todo_core::store::TodoStore`].
//! Transport concerns (binding, tracing layers) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", todo_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod items;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use todo_core::store::TodoStore;

pub use error::ApiError;

/// Largest request body the item endpoints will read, in bytes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TodoStore + 'static,
{
  Router::new()
    .route("/item", post(items::create::<S>).delete(items::complete::<S>))
    .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    .with_state(store)
}
