//! Recipe storage trait.

use async_trait::async_trait;
use larder_model::{NewRecipe, Recipe, RecipeUpdate};

use crate::error::StoreResult;
use crate::search::Filter;

/// Storage operations for recipe documents.
///
/// Listings and search results are always ordered by title ascending
/// (case-insensitive, ties broken by the literal title) so that every
/// read path presents recipes in the same order.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a recipe, assigning the next numeric id and the creation
    /// timestamp.
    async fn create_recipe(&self, new: NewRecipe) -> StoreResult<Recipe>;

    /// Reads a recipe by id.
    ///
    /// Returns `None` when no recipe has that id.
    async fn get_recipe(&self, id: u64) -> StoreResult<Option<Recipe>>;

    /// Returns every recipe, title ascending.
    async fn list_recipes(&self) -> StoreResult<Vec<Recipe>>;

    /// Applies a partial update to a recipe.
    ///
    /// Only the fields present in `update` change. Returns the updated
    /// recipe, or `None` when no recipe has that id.
    async fn update_recipe(&self, id: u64, update: RecipeUpdate) -> StoreResult<Option<Recipe>>;

    /// Returns the recipes matching `filter`, title ascending, capped at
    /// `limit` when present.
    ///
    /// The filter tree is backend-agnostic; how it executes (native query
    /// or direct evaluation against deserialized documents) is the
    /// backend's choice.
    async fn find_recipes(&self, filter: &Filter, limit: Option<usize>)
    -> StoreResult<Vec<Recipe>>;

    /// Returns every distinct tag across all recipes, sorted.
    async fn distinct_tags(&self) -> StoreResult<Vec<String>>;

    /// Returns every distinct submitter across all recipes, sorted.
    async fn distinct_submitters(&self) -> StoreResult<Vec<String>>;
}
