//! Shared response envelopes.

use larder_model::User;
use serde::Serialize;

/// The standard collection envelope: `{ "data": [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    /// The records.
    pub data: Vec<T>,
}

/// The create/update acknowledgement: `{ "id": ..., "title": ... }`.
#[derive(Debug, Clone, Serialize)]
pub struct IdTitleResponse {
    /// The recipe id.
    pub id: u64,
    /// The recipe title.
    pub title: String,
}

/// A user as exposed through the API.
///
/// Deliberately omits the id and the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Login name.
    pub username: String,
    /// Current session token, if signed in.
    pub token: Option<String>,
    /// Whether the user has admin privileges.
    pub is_admin: bool,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            username: user.username,
            token: user.token,
            is_admin: user.is_admin,
        }
    }
}

/// The user envelope: `{ "user": {...} }`.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// The user profile.
    pub user: UserProfile,
}

/// A bare success acknowledgement: `{ "success": true }`.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    /// Always true when returned.
    pub success: bool,
}
