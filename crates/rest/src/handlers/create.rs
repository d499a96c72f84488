//! Recipe creation handler.

use axum::{Json, extract::State};
use larder_model::{Category, Ingredient, NewRecipe, Servings};
use larder_store::core::RecipeStore;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::extractors::JsonBody;
use crate::responses::IdTitleResponse;
use crate::state::AppState;

/// The incoming creation body. Everything is optional at the parse stage so
/// that presence checks can produce the API's own field-level messages;
/// type errors (a non-array `tags`, an unknown `category`) are rejected by
/// the JSON extractor before this struct exists.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default)]
    submitted_by: Option<String>,
    #[serde(default)]
    servings: Option<Servings>,
    #[serde(default)]
    category: Option<Category>,
    #[serde(default)]
    vegetarian: Option<bool>,
    #[serde(default)]
    featured: Option<bool>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    footnotes: Option<Vec<String>>,
    #[serde(default)]
    ingredients: Option<Vec<Ingredient>>,
    #[serde(default)]
    steps: Option<Vec<String>>,
}

impl CreateRecipeBody {
    /// Validates field presence and produces the typed creation payload.
    fn into_new_recipe(self) -> Result<NewRecipe, ApiError> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(ApiError::bad_request("'title' is required")),
        };

        let submitted_by = match self.submitted_by {
            Some(submitted_by) if !submitted_by.trim().is_empty() => submitted_by,
            _ => return Err(ApiError::bad_request("'submitted_by' is required")),
        };

        let Some(category) = self.category else {
            return Err(ApiError::bad_request("'category' is required"));
        };

        let ingredients = match self.ingredients {
            Some(ingredients) if !ingredients.is_empty() => ingredients,
            _ => return Err(ApiError::bad_request("At least one ingredient is required")),
        };

        let steps = match self.steps {
            Some(steps) if !steps.is_empty() => steps,
            _ => return Err(ApiError::bad_request("At least one step is required")),
        };

        Ok(NewRecipe {
            title,
            source: self.source,
            source_url: self.source_url,
            submitted_by,
            servings: self.servings,
            category,
            vegetarian: self.vegetarian.unwrap_or(false),
            featured: self.featured.unwrap_or(false),
            tags: self.tags.unwrap_or_default(),
            footnotes: self.footnotes.unwrap_or_default(),
            ingredients,
            steps,
        })
    }
}

/// Handler for `POST /recipe/new`.
///
/// # Response
///
/// - `200 OK` with `{ "id": ..., "title": ... }`
/// - `400 Bad Request` when a required field is missing or empty
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody<CreateRecipeBody>,
) -> ApiResult<Json<IdTitleResponse>>
where
    S: RecipeStore + 'static,
{
    let new = body.into_new_recipe()?;
    let recipe = state.store().create_recipe(new).await?;

    debug!(id = recipe.id, title = %recipe.title, "Created recipe");
    Ok(Json(IdTitleResponse {
        id: recipe.id,
        title: recipe.title,
    }))
}
