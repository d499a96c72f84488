//! UserStore implementation for SQLite.

use async_trait::async_trait;
use larder_model::{NewUser, User};
use rusqlite::{OptionalExtension, params};
use tracing::debug;

use crate::core::UserStore;
use crate::error::{ResourceError, StoreResult};

use super::SqliteBackend;
use super::backend::{internal_error, serialization_error};

fn parse_user(data: &str) -> StoreResult<User> {
    serde_json::from_str(data)
        .map_err(|e| serialization_error(format!("Failed to parse user document: {}", e)))
}

#[async_trait]
impl UserStore for SqliteBackend {
    async fn create_user(&self, new: NewUser) -> StoreResult<User> {
        let mut conn = self.get_connection()?;
        let tx = conn
            .transaction()
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let next_id: u64 = tx
            .query_row("SELECT COALESCE(MAX(id), 0) + 1 FROM users", [], |row| {
                row.get(0)
            })
            .map_err(|e| internal_error(format!("Failed to allocate user id: {}", e)))?;

        let user = User::from_new(next_id, new);
        let data = serde_json::to_string(&user)
            .map_err(|e| serialization_error(format!("Failed to serialize user: {}", e)))?;

        let inserted = tx.execute(
            "INSERT INTO users (id, username, email, token, data)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![user.id, user.username, user.email, user.token, data],
        );

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, Some(message)))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                let field = if message.contains("users.email") {
                    "email"
                } else {
                    "username"
                };
                return Err(ResourceError::AlreadyExists {
                    kind: "user",
                    field,
                }
                .into());
            }
            Err(e) => return Err(internal_error(format!("Failed to insert user: {}", e))),
        }

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit user insert: {}", e)))?;

        debug!(id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let conn = self.get_connection()?;

        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read user: {}", e)))?;

        match data {
            Some(data) => Ok(Some(parse_user(&data)?)),
            None => Ok(None),
        }
    }

    async fn find_user_by_token(&self, token: &str) -> StoreResult<Option<User>> {
        let conn = self.get_connection()?;

        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM users WHERE token = ?1",
                params![token],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read user: {}", e)))?;

        match data {
            Some(data) => Ok(Some(parse_user(&data)?)),
            None => Ok(None),
        }
    }

    async fn set_user_token(&self, id: u64, token: Option<&str>) -> StoreResult<Option<User>> {
        let mut conn = self.get_connection()?;
        let tx = conn
            .transaction()
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let data: Option<String> = tx
            .query_row(
                "SELECT data FROM users WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read user: {}", e)))?;

        let Some(data) = data else {
            return Ok(None);
        };

        let mut user = parse_user(&data)?;
        user.token = token.map(str::to_string);

        let data = serde_json::to_string(&user)
            .map_err(|e| serialization_error(format!("Failed to serialize user: {}", e)))?;

        tx.execute(
            "UPDATE users SET token = ?1, data = ?2 WHERE id = ?3",
            params![user.token, data, id],
        )
        .map_err(|e| internal_error(format!("Failed to update user token: {}", e)))?;

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit token update: {}", e)))?;

        Ok(Some(user))
    }
}
