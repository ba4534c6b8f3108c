use crate::auth::{AuthError, AuthResult};

/// Authentication configuration loaded from environment variables.
///
/// The signing secret is process-wide, read once at startup, and never
/// rotated at runtime.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn from_env() -> AuthResult<Self> {
        let jwt_secret = std::env::var("CATALOG_JWT_SECRET")
            .map_err(|_| AuthError::Config("CATALOG_JWT_SECRET is required".into()))?;
        if jwt_secret.trim().is_empty() {
            return Err(AuthError::Config("CATALOG_JWT_SECRET must not be empty".into()));
        }

        Ok(Self { jwt_secret })
    }
}
