use rocket::http::Status;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email and password are required")]
    Validation,
    #[error("an account with this email already exists")]
    DuplicateIdentity,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid bearer token")]
    InvalidToken,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("argon2 parameter error: {0}")]
    Argon2(String),
    #[error("password hashing error: {0}")]
    PasswordHash(String),
    #[error("background task failed: {0}")]
    Task(String),
}

impl AuthError {
    pub fn status(&self) -> Status {
        match self {
            AuthError::Validation => Status::BadRequest,
            AuthError::DuplicateIdentity => Status::Conflict,
            AuthError::InvalidCredentials => Status::Unauthorized,
            AuthError::MissingToken | AuthError::InvalidToken => Status::Unauthorized,
            AuthError::Config(_)
            | AuthError::Sqlx(_)
            | AuthError::Jwt(_)
            | AuthError::Argon2(_)
            | AuthError::PasswordHash(_)
            | AuthError::Task(_) => Status::InternalServerError,
        }
    }
}

impl From<argon2::Error> for AuthError {
    fn from(err: argon2::Error) -> Self {
        AuthError::Argon2(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AuthError::PasswordHash(err.to_string())
    }
}
