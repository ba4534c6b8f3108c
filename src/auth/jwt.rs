use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::auth::{AuthConfig, AuthError, AuthResult};

/// Claims carried by an access token: the subject (user id) and issuance
/// time. Tokens carry no expiry and there is no revocation list; a token
/// is valid exactly as long as its signature checks out.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
}

pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn from_config(config: &AuthConfig) -> Self {
        let secret_bytes = config.jwt_secret.as_bytes();

        // The default validator rejects tokens without an `exp` claim, so
        // expiry checking is disabled explicitly.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
        }
    }

    /// Mint a signed token for the given subject.
    pub fn issue(&self, user_id: i32) -> AuthResult<String> {
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: Utc::now().timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Check structure and signature, returning the subject id. Purely a
    /// function of the token bytes and the process secret; no I/O.
    pub fn verify(&self, token: &str) -> AuthResult<i32> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AuthError::InvalidToken)?;
        data.claims.sub.parse().map_err(|_| AuthError::InvalidToken)
    }
}
