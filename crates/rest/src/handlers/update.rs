//! Recipe edit handler.

use axum::{
    Json,
    extract::{Path, State},
};
use larder_model::RecipeUpdate;
use larder_store::core::RecipeStore;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::extractors::JsonBody;
use crate::responses::IdTitleResponse;
use crate::state::AppState;

/// Handler for `PUT /recipe/{id}`.
///
/// Applies a partial update: only the fields present in the body change,
/// and unknown fields are ignored.
///
/// # Response
///
/// - `200 OK` with `{ "id": ..., "title": ... }`
/// - `400 Bad Request` when the id is not a number or the body carries no
///   recognized fields
/// - `404 Not Found` when no recipe has that id
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<RecipeUpdate>,
) -> ApiResult<Json<IdTitleResponse>>
where
    S: RecipeStore + 'static,
{
    let id: u64 = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid recipe ID"))?;

    if update.is_empty() {
        return Err(ApiError::bad_request(
            "You must include data to update in the request body.",
        ));
    }

    debug!(id, "Processing recipe update");

    match state.store().update_recipe(id, update).await? {
        Some(recipe) => Ok(Json(IdTitleResponse {
            id: recipe.id,
            title: recipe.title,
        })),
        None => Err(ApiError::not_found(
            "Recipe not found. Please check the ID and try again.",
        )),
    }
}
