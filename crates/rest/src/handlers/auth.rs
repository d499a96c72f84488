//! User account handlers: signup, signin, signout, and profile lookup.
//!
//! Sessions are opaque uuid-v4 bearer tokens stored on the user record. A
//! fresh token is minted at signup, rotated on every signin, and cleared on
//! signout. Passwords are hashed with argon2; signin failures are reported
//! identically whether the username or the password was wrong.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use larder_model::NewUser;
use larder_store::core::UserStore;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::extractors::{CurrentUser, JsonBody};
use crate::password::{hash_password, verify_password};
use crate::responses::{SuccessResponse, UserResponse};
use crate::state::AppState;

/// The incoming signup body. Fields are optional at the parse stage so that
/// presence checks produce field-level messages.
#[derive(Debug, Deserialize)]
pub struct SignupBody {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

/// The incoming signin body.
#[derive(Debug, Deserialize)]
pub struct SigninBody {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

fn require(value: Option<String>, message: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::bad_request(message)),
    }
}

/// Handler for `POST /signup`.
///
/// # Response
///
/// - `201 Created` with `{ "user": {...} }` (the profile includes the
///   initial session token)
/// - `400 Bad Request` when a field is missing
/// - `409 Conflict` when the username or email is taken
pub async fn signup_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody<SignupBody>,
) -> ApiResult<(StatusCode, Json<UserResponse>)>
where
    S: UserStore + 'static,
{
    let first_name = require(body.first_name, "First name is required")?;
    let last_name = require(body.last_name, "Last name is required")?;
    let email = require(body.email, "Email is required")?;
    let username = require(body.username, "Username is required")?;
    let password = require(body.password, "Password is required")?;

    let password_hash = hash_password(&password).map_err(|e| ApiError::Internal {
        message: format!("Failed to hash password: {}", e),
    })?;

    let token = Uuid::new_v4().to_string();

    let user = state
        .store()
        .create_user(NewUser {
            first_name,
            last_name,
            username,
            email,
            password_hash,
            token: Some(token),
        })
        .await?;

    debug!(username = %user.username, "User signed up");
    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    ))
}

/// Handler for `POST /signin`.
///
/// Verifies the credentials and rotates the session token.
///
/// # Response
///
/// - `200 OK` with `{ "user": {...} }` carrying the fresh token
/// - `400 Bad Request` when a field is missing
/// - `401 Unauthorized` when the username or password is wrong
pub async fn signin_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody<SigninBody>,
) -> ApiResult<Json<UserResponse>>
where
    S: UserStore + 'static,
{
    let username = require(body.username, "Username is required")?;
    let password = require(body.password, "Password is required")?;

    let invalid = || ApiError::unauthorized("Username or password is invalid.");

    let user = state
        .store()
        .find_user_by_username(&username)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&password, &user.password_hash) {
        return Err(invalid());
    }

    let token = Uuid::new_v4().to_string();
    let user = state
        .store()
        .set_user_token(user.id, Some(&token))
        .await?
        .ok_or_else(invalid)?;

    debug!(username = %user.username, "User signed in");
    Ok(Json(UserResponse { user: user.into() }))
}

/// Handler for `POST /signout`.
///
/// Requires a bearer token; clears it so it can no longer be used.
///
/// # Response
///
/// - `200 OK` with `{ "success": true }`
/// - `401 Unauthorized` without a valid token
pub async fn signout_handler<S>(
    State(state): State<AppState<S>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<SuccessResponse>>
where
    S: UserStore + 'static,
{
    state.store().set_user_token(user.id, None).await?;

    debug!(username = %user.username, "User signed out");
    Ok(Json(SuccessResponse { success: true }))
}

/// Handler for `GET /user`.
///
/// Looks up a profile by `username` or `token` query parameter.
///
/// # Response
///
/// - `200 OK` with `{ "user": {...} }`
/// - `400 Bad Request` when neither parameter is supplied
/// - `404 Not Found` when no user matches
pub async fn profile_handler<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<UserResponse>>
where
    S: UserStore + 'static,
{
    let user = if let Some(username) = params.get("username") {
        state.store().find_user_by_username(username).await?
    } else if let Some(token) = params.get("token") {
        state.store().find_user_by_token(token).await?
    } else {
        return Err(ApiError::bad_request(
            "A username or token query param is required.",
        ));
    };

    match user {
        Some(user) => Ok(Json(UserResponse { user: user.into() })),
        None => Err(ApiError::not_found("User not found.")),
    }
}
