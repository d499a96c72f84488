//! RecipeStore implementation for SQLite.

use async_trait::async_trait;
use chrono::Utc;
use larder_model::{NewRecipe, Recipe, RecipeUpdate};
use rusqlite::{OptionalExtension, params};
use tracing::debug;

use crate::core::RecipeStore;
use crate::error::StoreResult;
use crate::search::Filter;

use super::SqliteBackend;
use super::backend::{internal_error, serialization_error};

fn parse_recipe(data: &str) -> StoreResult<Recipe> {
    serde_json::from_str(data)
        .map_err(|e| serialization_error(format!("Failed to parse recipe document: {}", e)))
}

#[async_trait]
impl RecipeStore for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create_recipe(&self, new: NewRecipe) -> StoreResult<Recipe> {
        let mut conn = self.get_connection()?;
        let tx = conn
            .transaction()
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let next_id: u64 = tx
            .query_row("SELECT COALESCE(MAX(id), 0) + 1 FROM recipes", [], |row| {
                row.get(0)
            })
            .map_err(|e| internal_error(format!("Failed to allocate recipe id: {}", e)))?;

        let recipe = Recipe::from_new(next_id, Utc::now(), new);
        let data = serde_json::to_string(&recipe)
            .map_err(|e| serialization_error(format!("Failed to serialize recipe: {}", e)))?;

        tx.execute(
            "INSERT INTO recipes (id, title, data) VALUES (?1, ?2, ?3)",
            params![recipe.id, recipe.title, data],
        )
        .map_err(|e| internal_error(format!("Failed to insert recipe: {}", e)))?;

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit recipe insert: {}", e)))?;

        debug!(id = recipe.id, title = %recipe.title, "Created recipe");
        Ok(recipe)
    }

    async fn get_recipe(&self, id: u64) -> StoreResult<Option<Recipe>> {
        let conn = self.get_connection()?;

        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM recipes WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read recipe: {}", e)))?;

        match data {
            Some(data) => Ok(Some(parse_recipe(&data)?)),
            None => Ok(None),
        }
    }

    async fn list_recipes(&self) -> StoreResult<Vec<Recipe>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare("SELECT data FROM recipes ORDER BY title COLLATE NOCASE ASC, title ASC")
            .map_err(|e| internal_error(format!("Failed to prepare listing query: {}", e)))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| internal_error(format!("Failed to list recipes: {}", e)))?;

        let mut recipes = Vec::new();
        for row in rows {
            let data = row.map_err(|e| internal_error(format!("Failed to read row: {}", e)))?;
            recipes.push(parse_recipe(&data)?);
        }
        Ok(recipes)
    }

    async fn update_recipe(&self, id: u64, update: RecipeUpdate) -> StoreResult<Option<Recipe>> {
        let mut conn = self.get_connection()?;
        let tx = conn
            .transaction()
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let data: Option<String> = tx
            .query_row(
                "SELECT data FROM recipes WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read recipe: {}", e)))?;

        let Some(data) = data else {
            return Ok(None);
        };

        let mut recipe = parse_recipe(&data)?;
        recipe.apply(update);

        let data = serde_json::to_string(&recipe)
            .map_err(|e| serialization_error(format!("Failed to serialize recipe: {}", e)))?;

        tx.execute(
            "UPDATE recipes SET title = ?1, data = ?2 WHERE id = ?3",
            params![recipe.title, data, id],
        )
        .map_err(|e| internal_error(format!("Failed to update recipe: {}", e)))?;

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit recipe update: {}", e)))?;

        debug!(id, title = %recipe.title, "Updated recipe");
        Ok(Some(recipe))
    }

    async fn find_recipes(
        &self,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Recipe>> {
        let conn = self.get_connection()?;

        // Rows come back already title-ordered, so matching can stop as soon
        // as the cap is reached.
        let mut stmt = conn
            .prepare("SELECT data FROM recipes ORDER BY title COLLATE NOCASE ASC, title ASC")
            .map_err(|e| internal_error(format!("Failed to prepare search query: {}", e)))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| internal_error(format!("Failed to search recipes: {}", e)))?;

        let mut matches = Vec::new();
        for row in rows {
            let data = row.map_err(|e| internal_error(format!("Failed to read row: {}", e)))?;
            let recipe = parse_recipe(&data)?;
            if filter.matches(&recipe) {
                matches.push(recipe);
                if limit.is_some_and(|cap| matches.len() >= cap) {
                    break;
                }
            }
        }

        debug!(matched = matches.len(), "Search complete");
        Ok(matches)
    }

    async fn distinct_tags(&self) -> StoreResult<Vec<String>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare(
                "SELECT DISTINCT je.value
                 FROM recipes AS r, json_each(r.data, '$.tags') AS je
                 ORDER BY je.value",
            )
            .map_err(|e| internal_error(format!("Failed to prepare tags query: {}", e)))?;

        collect_strings(&mut stmt)
    }

    async fn distinct_submitters(&self) -> StoreResult<Vec<String>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare(
                "SELECT DISTINCT json_extract(data, '$.submitted_by')
                 FROM recipes ORDER BY 1",
            )
            .map_err(|e| internal_error(format!("Failed to prepare submitters query: {}", e)))?;

        collect_strings(&mut stmt)
    }
}

fn collect_strings(stmt: &mut rusqlite::Statement<'_>) -> StoreResult<Vec<String>> {
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| internal_error(format!("Failed to run query: {}", e)))?;

    let mut values = Vec::new();
    for row in rows {
        values.push(row.map_err(|e| internal_error(format!("Failed to read row: {}", e)))?);
    }
    Ok(values)
}
