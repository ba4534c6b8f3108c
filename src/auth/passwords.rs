use argon2::{
    Algorithm, Argon2, ParamsBuilder, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::RngCore;

use crate::auth::{AuthError, AuthResult};

const SALT_LEN: usize = 16;

/// One-way salted password hashing with a deliberately expensive work
/// factor. Two hashes of the same plaintext never match byte-for-byte;
/// only `verify_password` relates them.
#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    pub fn new() -> AuthResult<Self> {
        let mut builder = ParamsBuilder::new();
        builder.m_cost(19 * 1024); // 19 MiB
        builder.t_cost(2);
        builder.p_cost(1);
        let params = builder.build().map_err(AuthError::from)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        Ok(Self { argon2 })
    }

    pub fn hash_password(&self, password: &str) -> AuthResult<String> {
        let mut salt_bytes = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes).map_err(AuthError::from)?;
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(AuthError::from)?
            .to_string();
        Ok(hash)
    }

    /// Constant-time verification against a stored PHC string. A digest
    /// that does not parse verifies as `false` rather than erroring.
    pub fn verify_password(&self, password: &str, encoded: &str) -> AuthResult<bool> {
        let parsed = match PasswordHash::new(encoded) {
            Ok(parsed) => parsed,
            Err(_) => return Ok(false),
        };
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(AuthError::from(err)),
        }
    }
}
