//! Axum extractors for the catalog API.

pub mod auth;
pub mod json_body;

pub use auth::CurrentUser;
pub use json_body::JsonBody;
