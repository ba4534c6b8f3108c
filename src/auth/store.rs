use sqlx::{FromRow, PgPool};

use crate::auth::{AuthError, AuthResult};

/// A registered identity as persisted in the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct Identity {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
}

/// Persistence for `(email, password_hash)` pairs. Uniqueness on email is
/// enforced by the database, which is also what arbitrates concurrent
/// signups: exactly one insert wins, the loser sees `DuplicateIdentity`.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    pool: PgPool,
}

impl CredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new identity and return its id.
    pub async fn create(&self, email: &str, password_hash: &str) -> AuthResult<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AuthError::DuplicateIdentity
            }
            _ => AuthError::from(err),
        })?;

        Ok(id)
    }

    pub async fn find_by_email(&self, email: &str) -> AuthResult<Option<Identity>> {
        let identity = sqlx::query_as(
            "SELECT id, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(identity)
    }
}
