//! SQLite document-store backend.
//!
//! Recipes and users are stored as whole JSON documents, one row per record,
//! with a handful of extracted columns for ordering (`recipes.title`),
//! uniqueness (`users.username`, `users.email`), and token lookup. Search
//! filters are evaluated against the deserialized documents; the catalog is
//! small enough that loading the title-ordered collection and walking it is
//! the simplest correct execution of the filter tree.

mod backend;
mod recipes;
mod schema;
mod users;

pub use backend::{SqliteBackend, SqliteBackendConfig};
