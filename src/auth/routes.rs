use rocket::State;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::tokio::task;
use rocket_okapi::openapi;

use crate::auth::responses::{CredentialsRequest, TokenResponse};
use crate::auth::{AuthError, AuthState};
use crate::error::ErrorBody;

type AuthRouteResult<T> = Result<Json<T>, status::Custom<Json<ErrorBody>>>;

/// Register a new identity and return a token for it.
#[openapi(tag = "Auth")]
#[post("/auth/signup", data = "<payload>")]
pub async fn signup(
    state: &State<AuthState>,
    payload: Json<CredentialsRequest>,
) -> AuthRouteResult<TokenResponse> {
    let (email, password) = normalize(&payload)?;

    // Argon2 is deliberately slow; keep it off the request workers.
    let hasher = state.password_service.clone();
    let password_hash = task::spawn_blocking(move || hasher.hash_password(&password))
        .await
        .map_err(|err| respond_error(AuthError::Task(err.to_string())))?
        .map_err(respond_error)?;

    let user_id = state
        .credential_store
        .create(&email, &password_hash)
        .await
        .map_err(respond_error)?;

    let token = state.jwt_service.issue(user_id).map_err(respond_error)?;

    log::info!("registered identity {} for {}", user_id, email);

    Ok(Json(TokenResponse { token }))
}

/// Authenticate an existing identity and return a fresh token.
#[openapi(tag = "Auth")]
#[post("/auth/signin", data = "<payload>")]
pub async fn signin(
    state: &State<AuthState>,
    payload: Json<CredentialsRequest>,
) -> AuthRouteResult<TokenResponse> {
    let (email, password) = normalize(&payload)?;

    // An unknown email and a wrong password produce the same response, so
    // the endpoint cannot be used to enumerate accounts.
    let identity = state
        .credential_store
        .find_by_email(&email)
        .await
        .map_err(respond_error)?
        .ok_or_else(|| respond_error(AuthError::InvalidCredentials))?;

    let hasher = state.password_service.clone();
    let stored_hash = identity.password_hash.clone();
    let verified = task::spawn_blocking(move || hasher.verify_password(&password, &stored_hash))
        .await
        .map_err(|err| respond_error(AuthError::Task(err.to_string())))?
        .map_err(respond_error)?;

    if !verified {
        return Err(respond_error(AuthError::InvalidCredentials));
    }

    let token = state.jwt_service.issue(identity.id).map_err(respond_error)?;

    Ok(Json(TokenResponse { token }))
}

/// Trim and lowercase the email; the lowercased form is what the store
/// persists and looks up, fixing the comparison policy in one place. The
/// password is taken verbatim, whitespace included.
fn normalize(
    payload: &CredentialsRequest,
) -> Result<(String, String), status::Custom<Json<ErrorBody>>> {
    let email = payload.email.trim().to_lowercase();
    let password = payload.password.clone();

    if email.is_empty() || password.is_empty() {
        return Err(respond_error(AuthError::Validation));
    }

    Ok((email, password))
}

fn respond_error(err: AuthError) -> status::Custom<Json<ErrorBody>> {
    let status = err.status();
    let error = if status == Status::InternalServerError {
        log::error!("auth failure: {}", err);
        "internal server error".to_string()
    } else {
        err.to_string()
    };

    status::Custom(status, Json(ErrorBody { error }))
}
