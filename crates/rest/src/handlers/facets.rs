//! Catalog listing handlers: categories, tags, and submitters.

use axum::{Json, extract::State};
use larder_model::Category;
use larder_store::core::RecipeStore;
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

/// Response for `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    /// The category values, in canonical order.
    pub categories: Vec<&'static str>,
}

/// Response for `GET /tags`.
#[derive(Debug, Serialize)]
pub struct TagsResponse {
    /// Distinct tags across all recipes, sorted.
    pub tags: Vec<String>,
}

/// Response for `GET /submitters`.
#[derive(Debug, Serialize)]
pub struct SubmittersResponse {
    /// Distinct submitters across all recipes, sorted.
    pub submitters: Vec<String>,
}

/// Handler for `GET /categories`.
///
/// The category set is fixed, so this never touches storage.
pub async fn categories_handler() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: Category::ALL.iter().map(Category::as_str).collect(),
    })
}

/// Handler for `GET /tags`.
pub async fn tags_handler<S>(State(state): State<AppState<S>>) -> ApiResult<Json<TagsResponse>>
where
    S: RecipeStore + 'static,
{
    let tags = state.store().distinct_tags().await?;
    Ok(Json(TagsResponse { tags }))
}

/// Handler for `GET /submitters`.
pub async fn submitters_handler<S>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<SubmittersResponse>>
where
    S: RecipeStore + 'static,
{
    let submitters = state.store().distinct_submitters().await?;
    Ok(Json(SubmittersResponse { submitters }))
}
