//! # larder-rest - HTTP API for the Larder recipe catalog
//!
//! This crate provides the complete HTTP surface of the catalog: recipe
//! CRUD, the search endpoint, the catalog listings (categories, tags,
//! submitters), and user signup/signin/signout.
//!
//! ## API Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Service info |
//! | GET | `/health` | Liveness check |
//! | GET | `/recipes` | All recipes, title ascending |
//! | GET | `/recipe/{id}` | One recipe by id |
//! | POST | `/recipe/new` | Create a recipe |
//! | PUT | `/recipe/{id}` | Partially update a recipe |
//! | GET | `/search` | Search recipes by query parameters |
//! | GET | `/categories` | The category values |
//! | GET | `/tags` | Distinct tags across all recipes |
//! | GET | `/submitters` | Distinct submitters across all recipes |
//! | POST | `/signup` | Register a user |
//! | POST | `/signin` | Sign in, rotating the session token |
//! | POST | `/signout` | Sign out (bearer token required) |
//! | GET | `/user` | Look up a profile by username or token |
//!
//! ## Response conventions
//!
//! Collection endpoints return `{ "data": [...] }` (or a named list such as
//! `{ "tags": [...] }`); every error is `{ "error": { "message": "..." } }`
//! with the appropriate status code. See [`error`] for the mapping from
//! store errors to statuses.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use larder_rest::{ServerConfig, create_app_with_config, init_logging};
//! use larder_store::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("larder.db")?;
//!     backend.init_schema()?;
//!
//!     let config = ServerConfig::from_env();
//!     init_logging(&config.log_level);
//!
//!     let app = create_app_with_config(backend, config.clone());
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - `ApiError` and the error body shape
//! - [`config`] - server configuration (flags and environment variables)
//! - [`state`] - shared application state, generic over the store
//! - [`extractors`] - bearer-token auth and JSON body extraction
//! - [`handlers`] - one module per endpoint group
//! - [`responses`] - shared response envelopes
//! - [`routing`] - route assembly

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod password;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use larder_store::core::{RecipeStore, UserStore};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: RecipeStore + UserStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up all routes, the middleware stack (request tracing, timeouts),
/// and CORS when enabled.
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: RecipeStore + UserStore + 'static,
{
    info!(backend = store.backend_name(), "Creating API server");

    let state = AppState::new(Arc::new(store), config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.request_timeout,
        )));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// Call once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "larder={level},larder_rest={level},larder_store={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
