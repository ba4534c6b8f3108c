//! Protected probe route: the smallest consumer of the auth guard.

use rocket::serde::json::Json;
use rocket_okapi::openapi;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProbeResponse {
    pub message: String,
    pub user_id: i32,
}

/// Echoes the subject id the guard resolved from the bearer token.
/// Requests without a valid token never reach this handler.
#[openapi(tag = "Auth")]
#[get("/api/test")]
pub fn auth_probe(user: AuthUser) -> Json<ProbeResponse> {
    Json(ProbeResponse {
        message: format!("authenticated as user {}", user.id),
        user_id: user.id,
    })
}
