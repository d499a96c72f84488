//! Search handler.
//!
//! `GET /search?params` - builds a filter from the query parameters and
//! returns the matching recipes, title ascending.
//!
//! Two stages, both pure: the raw query map is parsed into a typed
//! [`SearchRequest`] (which strictly validates `limit`), then built into a
//! single filter tree (which requires at least one criterion). Both failure
//! modes are 400s; executing the filter is the store's job.

use std::collections::HashMap;

use axum::{Json, extract::{Query, State}};
use larder_model::Recipe;
use larder_store::core::RecipeStore;
use larder_store::search::SearchRequest;
use tracing::debug;

use crate::error::ApiResult;
use crate::responses::DataResponse;
use crate::state::AppState;

/// Handler for `GET /search`.
///
/// # Query parameters
///
/// - `all` - `true` to require every criterion to match (default: any)
/// - `wildcard` - comma-separated terms matched against title, ingredients,
///   notes, steps, tags, and footnotes
/// - `tags`, `ingredients` - comma-separated lists
/// - `title`, `source`, `submitted_by`, `steps`, `footnotes` - substring
///   matches
/// - `category` - literal category value
/// - `vegetarian`, `featured` - flag filters (presence-coerced)
/// - `limit` - positive integer result cap
///
/// # Response
///
/// - `200 OK` with `{ "data": [...] }`
/// - `400 Bad Request` when no criteria were supplied or `limit` is invalid
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<DataResponse<Recipe>>>
where
    S: RecipeStore + 'static,
{
    debug!(params = ?params, "Processing search request");

    let request = SearchRequest::from_query(&params)?;
    let search = request.build()?;

    let data = state
        .store()
        .find_recipes(&search.filter, search.limit.map(|n| n as usize))
        .await?;

    debug!(matched = data.len(), "Search complete");
    Ok(Json(DataResponse { data }))
}
