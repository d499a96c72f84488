//! User storage trait.

use async_trait::async_trait;
use larder_model::{NewUser, User};

use crate::error::StoreResult;

/// Storage operations for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates a user, assigning the next numeric id.
    ///
    /// # Errors
    ///
    /// [`ResourceError::AlreadyExists`](crate::error::ResourceError::AlreadyExists)
    /// when the username or email is already taken.
    async fn create_user(&self, new: NewUser) -> StoreResult<User>;

    /// Looks up a user by exact username.
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Looks up a user by session token.
    async fn find_user_by_token(&self, token: &str) -> StoreResult<Option<User>>;

    /// Replaces a user's session token (`None` clears it).
    ///
    /// Returns the updated user, or `None` when no user has that id.
    async fn set_user_token(&self, id: u64, token: Option<&str>) -> StoreResult<Option<User>>;
}
