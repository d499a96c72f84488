//! Recipe listing handler.

use axum::{Json, extract::State};
use larder_model::Recipe;
use larder_store::core::RecipeStore;

use crate::error::ApiResult;
use crate::responses::DataResponse;
use crate::state::AppState;

/// Handler for `GET /recipes`.
///
/// Returns every recipe, title ascending, as `{ "data": [...] }`.
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<DataResponse<Recipe>>>
where
    S: RecipeStore + 'static,
{
    let data = state.store().list_recipes().await?;
    Ok(Json(DataResponse { data }))
}
