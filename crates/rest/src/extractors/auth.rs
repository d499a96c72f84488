//! Bearer-token authentication extractor.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use larder_model::User;
use larder_store::core::UserStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor that validates the `Authorization: Bearer <token>` header and
/// resolves it to the signed-in user.
///
/// Use it in any handler that requires authentication:
///
/// ```rust,ignore
/// async fn my_handler(CurrentUser(user): CurrentUser) {
///     // user is the authenticated User
/// }
/// ```
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<AppState<S>> for CurrentUser
where
    S: UserStore + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::unauthorized("Invalid Authorization header"))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Invalid Authorization header format"))?;

        let user = state
            .store()
            .find_user_by_token(token)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid or expired token"))?;

        Ok(CurrentUser(user))
    }
}
