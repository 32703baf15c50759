//! Core types and trait definitions for the todo service.
//!
//! This crate is free of HTTP and database dependencies. The store backends
//! and the API crate depend on it.

pub mod error;
pub mod item;
pub mod memory;
pub mod store;
pub mod validate;

pub use error::ValidationError;
