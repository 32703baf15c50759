//! Error types for `todo-core`.

use thiserror::Error;

/// Caller input that does not satisfy an operation's request contract.
///
/// The `Display` output is the exact message returned to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Todo text is required")]
  TextRequired,

  #[error("Todo id is required")]
  IdRequired,
}
