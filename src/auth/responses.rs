use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Signup and signin accept the same payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// The only thing either auth endpoint returns on success. The password
/// hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TokenResponse {
    pub token: String,
}
