use rocket::State;
use rocket::request::{FromRequest, Outcome, Request};
use rocket_okapi::request::OpenApiFromRequest;

use crate::auth::{AuthError, AuthResult, AuthState};

/// The identity resolved from the request's bearer token.
///
/// The token is the sole proof of identity: verification is a pure check
/// of the signature, with no store lookup per request. The trade-off is
/// that there is no server-side revocation.
#[derive(Debug, Clone, OpenApiFromRequest)]
pub struct AuthUser {
    pub id: i32,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthUser {
    type Error = AuthError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match extract_subject(request).await {
            Ok(id) => Outcome::Success(AuthUser { id }),
            Err(err) => Outcome::Error((err.status(), err)),
        }
    }
}

async fn extract_subject(request: &Request<'_>) -> AuthResult<i32> {
    let token = bearer_token_from_request(request)?;

    let auth_state = request
        .guard::<&State<AuthState>>()
        .await
        .succeeded()
        .ok_or_else(|| AuthError::Config("AuthState missing from managed state".into()))?;

    auth_state.jwt_service.verify(token)
}

fn bearer_token_from_request<'r>(request: &'r Request<'_>) -> AuthResult<&'r str> {
    let header = request
        .headers()
        .get_one("Authorization")
        .ok_or(AuthError::MissingToken)?;
    let mut parts = header.splitn(2, ' ');
    let scheme = parts.next().unwrap_or_default();
    let token = parts.next().unwrap_or_default();
    if scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty() {
        Ok(token)
    } else {
        Err(AuthError::InvalidToken)
    }
}
