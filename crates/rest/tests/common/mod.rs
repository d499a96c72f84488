//! Shared test harness for REST API tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum_test::TestServer;
use larder_rest::{ServerConfig, create_app_with_config};
use larder_store::backends::sqlite::SqliteBackend;
use serde_json::{Value, json};

/// Builds a test server over a fresh in-memory SQLite backend.
pub fn test_server() -> TestServer {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");

    let app = create_app_with_config(backend, ServerConfig::for_testing());
    TestServer::new(app).expect("Failed to create test server")
}

/// A valid recipe creation body with the given title and submitter.
pub fn recipe_body(title: &str, submitted_by: &str) -> Value {
    json!({
        "title": title,
        "submitted_by": submitted_by,
        "category": "entree",
        "ingredients": [{"ingredient": "1 thing"}],
        "steps": ["Cook it"]
    })
}

/// Creates a recipe through the API and returns its id.
pub async fn create_recipe(server: &TestServer, body: Value) -> u64 {
    let response = server.post("/recipe/new").json(&body).await;
    assert_eq!(response.status_code(), 200, "{}", response.text());
    response.json::<Value>()["id"].as_u64().expect("id")
}

/// Seeds the three-recipe catalog the search tests rely on.
pub async fn seed_catalog(server: &TestServer) {
    create_recipe(
        server,
        json!({
            "title": "Chocolate Cake",
            "source": "Aunt May",
            "submitted_by": "alice",
            "servings": 12,
            "category": "dessert",
            "vegetarian": true,
            "featured": true,
            "tags": ["Baking", "chocolate"],
            "footnotes": ["Best served warm"],
            "ingredients": [
                {"ingredient": "2 cups flour", "note": "sifted"},
                {"ingredient": "1 cup cocoa"}
            ],
            "steps": ["Mix", "Bake at 350F"]
        }),
    )
    .await;

    create_recipe(
        server,
        json!({
            "title": "Minestrone",
            "submitted_by": "bob",
            "category": "entree",
            "vegetarian": true,
            "tags": ["soup", "comfort"],
            "ingredients": [
                {"ingredient": "2 carrots", "note": "diced"},
                {"ingredient": "1 can tomatoes"}
            ],
            "steps": ["Simmer everything"]
        }),
    )
    .await;

    create_recipe(
        server,
        json!({
            "title": "Beef Chili",
            "source": "Dad",
            "submitted_by": "carol",
            "category": "entree",
            "tags": ["comfort", "spicy"],
            "footnotes": ["Freezes well"],
            "ingredients": [
                {"ingredient": "1 lb ground beef"},
                {"ingredient": "1 can tomatoes", "note": "crushed"}
            ],
            "steps": ["Brown the beef", "Simmer"]
        }),
    )
    .await;
}

/// Extracts the titles from a `{ "data": [...] }` response body.
pub fn titles(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|r| r["title"].as_str().expect("title").to_string())
        .collect()
}

/// Extracts the error message from an error response body.
pub fn error_message(body: &Value) -> String {
    body["error"]["message"]
        .as_str()
        .expect("error message")
        .to_string()
}

/// Signs up a user and returns `(username, token)`.
pub async fn signup(server: &TestServer, username: &str) -> (String, String) {
    let response = server
        .post("/signup")
        .json(&json!({
            "first_name": "Test",
            "last_name": "User",
            "email": format!("{username}@example.com"),
            "username": username,
            "password": "correct horse battery staple"
        }))
        .await;
    assert_eq!(response.status_code(), 201, "{}", response.text());
    let body = response.json::<Value>();
    let token = body["user"]["token"].as_str().expect("token").to_string();
    (username.to_string(), token)
}
