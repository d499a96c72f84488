//! Concrete storage backends.

#[cfg(feature = "sqlite")]
pub mod sqlite;
