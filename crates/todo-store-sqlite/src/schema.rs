//! SQL schema for the todo SQLite store.
//!
//! Executed once at connection startup. The layout is tracked with
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids monotonic and never reused.
CREATE TABLE IF NOT EXISTS TodoItems (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    text      TEXT    NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT false,
    createdAt TEXT    NOT NULL   -- RFC 3339 UTC; server-assigned
);

PRAGMA user_version = 1;
";
