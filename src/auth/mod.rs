//! Authentication: configuration, credential storage, password hashing,
//! token minting, and the request guard protecting API routes.

use std::sync::Arc;

use sqlx::PgPool;

pub mod config;
pub mod error;
pub mod guards;
pub mod jwt;
pub mod passwords;
pub mod responses;
pub mod routes;
pub mod store;

pub use config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use guards::AuthUser;
pub use jwt::JwtService;
pub use passwords::PasswordService;
pub use store::CredentialStore;

#[derive(Clone)]
pub struct AuthState {
    pub config: AuthConfig,
    pub password_service: Arc<PasswordService>,
    pub jwt_service: Arc<JwtService>,
    pub credential_store: CredentialStore,
}

impl AuthState {
    pub fn new(
        config: AuthConfig,
        password_service: PasswordService,
        jwt_service: JwtService,
        credential_store: CredentialStore,
    ) -> Self {
        Self {
            config,
            password_service: Arc::new(password_service),
            jwt_service: Arc::new(jwt_service),
            credential_store,
        }
    }

    /// Build the full auth stack from the environment plus a database pool.
    ///
    /// Fails when the signing secret is missing, which aborts launch.
    pub fn from_env(pool: PgPool) -> AuthResult<Self> {
        let config = AuthConfig::from_env()?;
        let password_service = PasswordService::new()?;
        let jwt_service = JwtService::from_config(&config);
        let credential_store = CredentialStore::new(pool);
        Ok(Self::new(config, password_service, jwt_service, credential_store))
    }
}
