//! Shared fixtures for store integration tests.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use larder_model::{Category, Ingredient, NewRecipe, NewUser, Servings};

#[cfg(feature = "sqlite")]
use larder_store::backends::sqlite::SqliteBackend;

#[cfg(feature = "sqlite")]
pub fn sqlite_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

/// A minimal valid recipe with the given title and submitter.
pub fn new_recipe(title: &str, submitted_by: &str) -> NewRecipe {
    NewRecipe {
        title: title.to_string(),
        source: None,
        source_url: None,
        submitted_by: submitted_by.to_string(),
        servings: None,
        category: Category::Entree,
        vegetarian: false,
        featured: false,
        tags: vec![],
        footnotes: vec![],
        ingredients: vec![Ingredient {
            ingredient: "1 thing".to_string(),
            note: None,
        }],
        steps: vec!["Cook it".to_string()],
    }
}

/// A fully-populated recipe for search tests.
pub fn chocolate_cake() -> NewRecipe {
    NewRecipe {
        title: "Chocolate Cake".to_string(),
        source: Some("Aunt May".to_string()),
        source_url: None,
        submitted_by: "alice".to_string(),
        servings: Some(Servings::Count(12)),
        category: Category::Dessert,
        vegetarian: true,
        featured: true,
        tags: vec!["Baking".to_string(), "chocolate".to_string()],
        footnotes: vec!["Best served warm".to_string()],
        ingredients: vec![
            Ingredient {
                ingredient: "2 cups flour".to_string(),
                note: Some("sifted".to_string()),
            },
            Ingredient {
                ingredient: "1 cup cocoa".to_string(),
                note: None,
            },
        ],
        steps: vec!["Mix".to_string(), "Bake at 350F".to_string()],
    }
}

pub fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
        token: Some(format!("token-{username}")),
    }
}
