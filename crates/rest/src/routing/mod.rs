//! Route configuration.

use axum::{
    Router,
    routing::{get, post, put},
};
use larder_store::core::{RecipeStore, UserStore};

use crate::handlers;
use crate::state::AppState;

/// Creates all catalog API routes.
///
/// # Routes
///
/// ## Recipes
/// - `GET /recipes` - All recipes
/// - `GET /recipe/{id}` - Read
/// - `POST /recipe/new` - Create
/// - `PUT /recipe/{id}` - Edit
/// - `GET /search` - Search
///
/// ## Catalog listings
/// - `GET /categories` - Category values
/// - `GET /tags` - Distinct tags
/// - `GET /submitters` - Distinct submitters
///
/// ## Users
/// - `POST /signup` - Register
/// - `POST /signin` - Sign in
/// - `POST /signout` - Sign out (authenticated)
/// - `GET /user` - Profile lookup
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: RecipeStore + UserStore + 'static,
{
    Router::new()
        // System
        .route("/", get(handlers::info_handler))
        .route("/health", get(handlers::health_handler))
        // Recipes
        .route("/recipes", get(handlers::list_handler::<S>))
        .route("/recipe/new", post(handlers::create_handler::<S>))
        .route("/recipe/{id}", get(handlers::read_handler::<S>))
        .route("/recipe/{id}", put(handlers::update_handler::<S>))
        .route("/search", get(handlers::search_handler::<S>))
        // Catalog listings
        .route("/categories", get(handlers::categories_handler))
        .route("/tags", get(handlers::tags_handler::<S>))
        .route("/submitters", get(handlers::submitters_handler::<S>))
        // Users
        .route("/signup", post(handlers::signup_handler::<S>))
        .route("/signin", post(handlers::signin_handler::<S>))
        .route("/signout", post(handlers::signout_handler::<S>))
        .route("/user", get(handlers::profile_handler::<S>))
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    // Route behavior is covered by the integration tests.
}
