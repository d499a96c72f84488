//! The typed search model.
//!
//! Searching happens in two explicit stages:
//!
//! 1. [`SearchRequest::from_query`] parses the raw query-string map into a
//!    typed request, rejecting an invalid `limit` and applying the presence
//!    coercion policy for boolean parameters at this boundary.
//! 2. [`SearchRequest::build`] turns the typed request into a [`Search`]: a
//!    single [`Filter`] predicate tree plus an optional result cap, ready to
//!    hand to [`RecipeStore::find_recipes`](crate::core::RecipeStore::find_recipes).
//!
//! Both stages are pure; building the same request twice yields an identical
//! filter.

pub mod filter;
pub mod request;

pub use filter::{Filter, FlagField, TextField};
pub use request::{Search, SearchRequest};
