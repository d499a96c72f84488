//! # larder-model - Domain types for the Larder recipe catalog
//!
//! This crate defines the plain data types shared by the storage and REST
//! layers: recipes (with their categories, servings, ingredients, and
//! free-form tags) and user accounts. It contains no I/O; everything here is
//! serde-serializable and backend-agnostic.

pub mod recipe;
pub mod user;

pub use recipe::{Category, Ingredient, NewRecipe, Recipe, RecipeUpdate, Servings};
pub use user::{NewUser, User};
