//! HTTP server wiring for the todo service.
//!
//! Loads [`ServerConfig`], and builds the top-level [`Router`] that mounts
//! the JSON API under `/api` behind a request tracing layer.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use config::{ConfigBuilder, ConfigError, builder::DefaultState};
use serde::Deserialize;
use todo_core::store::TodoStore;
use tower_http::trace::TraceLayer;

/// Environment variables with this prefix override file settings,
/// e.g. `TODO_PORT=8080`.
pub const ENV_PREFIX: &str = "TODO";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl ServerConfig {
  /// Layer defaults, the optional TOML file at `path`, and `TODO_*`
  /// environment variables, in increasing precedence.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::load_with_env(path, config::Environment::with_prefix(ENV_PREFIX))
  }

  fn load_with_env(
    path: &Path,
    env: config::Environment,
  ) -> Result<Self, ConfigError> {
    defaults()?
      .add_source(config::File::from(path).required(false))
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  /// `host:port`, suitable for binding.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
  config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 4321)?
    .set_default("store_path", "todo.db")
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the server's top-level [`Router`].
pub fn router<S>(store: Arc<S>) -> Router
where
  S: TodoStore + 'static,
{
  Router::new()
    .nest("/api", todo_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}
