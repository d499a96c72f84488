//! Recipe read handler.

use axum::{
    Json,
    extract::{Path, State},
};
use larder_model::Recipe;
use larder_store::core::RecipeStore;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Handler for `GET /recipe/{id}`.
///
/// # Response
///
/// - `200 OK` with the recipe document
/// - `400 Bad Request` when the id is not a number
/// - `404 Not Found` when no recipe has that id
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Recipe>>
where
    S: RecipeStore + 'static,
{
    let id: u64 = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid recipe ID"))?;

    debug!(id, "Processing recipe read");

    match state.store().get_recipe(id).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => Err(ApiError::not_found("Recipe not found")),
    }
}
