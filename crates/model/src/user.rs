//! User account types.

use serde::{Deserialize, Serialize};

/// A stored user account.
///
/// `password_hash` is an argon2 PHC string and must never be exposed through
/// the API; response shaping happens in the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned numeric id.
    pub id: u64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 PHC-format password hash.
    pub password_hash: String,
    /// Current session token, if signed in.
    #[serde(default)]
    pub token: Option<String>,
    /// Whether the user has admin privileges.
    #[serde(default)]
    pub is_admin: bool,
}

/// A validated signup payload. The store assigns `id`; the HTTP layer has
/// already hashed the password and minted the initial session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 PHC-format password hash.
    pub password_hash: String,
    /// Initial session token.
    pub token: Option<String>,
}

impl User {
    /// Builds a stored user from a signup payload.
    pub fn from_new(id: u64, new: NewUser) -> Self {
        User {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            token: new.token,
            is_admin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_is_never_admin() {
        let user = User::from_new(
            1,
            NewUser {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                password_hash: "$argon2id$...".to_string(),
                token: Some("tok".to_string()),
            },
        );
        assert_eq!(user.id, 1);
        assert!(!user.is_admin);
        assert_eq!(user.token.as_deref(), Some("tok"));
    }
}
