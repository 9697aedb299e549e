use std::sync::OnceLock;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rand::Rng;

use crate::error::{Error, Result};

// Session tokens carry 96 bits of randomness, so a light hash is enough.
const TOKEN_MEMORY: u32 = 64 * 1024; // KiB
const TOKEN_ITERATIONS: u32 = 1;
const TOKEN_PARALLELISM: u32 = 4;
const OUTPUT_LEN: usize = 32;

const TOKEN_PREFIX: &str = "timegrid";
const LOOKUP_LENGTH: usize = 8;
const SECRET_LENGTH: usize = 24;
const SECRET_BYTES: usize = 12;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Hashes and verifies the two kinds of secrets the server keeps:
/// account passwords and session tokens.
pub struct SecretHasher {
    tokens: Argon2<'static>,
    passwords: Argon2<'static>,
    placeholder: OnceLock<Option<String>>,
}

impl Default for SecretHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretHasher {
    #[must_use]
    pub fn new() -> Self {
        let token_params = Params::new(
            TOKEN_MEMORY,
            TOKEN_ITERATIONS,
            TOKEN_PARALLELISM,
            Some(OUTPUT_LEN),
        )
        .expect("invalid argon2 params");

        Self {
            tokens: Argon2::new(Algorithm::Argon2id, Version::V0x13, token_params),
            passwords: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
            placeholder: OnceLock::new(),
        }
    }

    /// Generates a new session token with the format: timegrid_<lookup>_<secret>
    /// Returns (raw_token, lookup, hash)
    pub fn generate_session_token(&self) -> Result<(String, String, String)> {
        let lookup = generate_lookup();
        let secret = generate_secret();
        let raw_token = build_token(&lookup, &secret);
        let hash = hash_with(&self.tokens, &raw_token)?;
        Ok((raw_token, lookup, hash))
    }

    pub fn verify_session_token(&self, token: &str, hash: &str) -> Result<bool> {
        verify_with(&self.tokens, token, hash)
    }

    pub fn hash_password(&self, password: &str) -> Result<String> {
        hash_with(&self.passwords, password)
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        verify_with(&self.passwords, password, hash)
    }

    /// Spends one password verification on a throwaway hash, so a sign-in
    /// for an unknown email takes as long as one with a wrong password.
    pub fn verify_unknown_account(&self, password: &str) {
        let placeholder = self
            .placeholder
            .get_or_init(|| hash_with(&self.passwords, "timegrid-placeholder").ok());

        if let Some(hash) = placeholder {
            let _ = verify_with(&self.passwords, password, hash);
        }
    }
}

fn hash_with(argon2: &Argon2<'_>, secret: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| Error::Config(format!("failed to hash secret: {e}")))?;
    Ok(hash.to_string())
}

fn verify_with(argon2: &Argon2<'_>, secret: &str, hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| Error::Config(format!("invalid hash format: {e}")))?;

    match argon2.verify_password(secret.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Config(format!("failed to verify secret: {e}"))),
    }
}

/// Generates the lookup portion of the token (first 8 chars of a UUID)
#[must_use]
fn generate_lookup() -> String {
    let uuid = uuid::Uuid::new_v4();
    uuid.to_string()[..LOOKUP_LENGTH].to_string()
}

#[must_use]
fn generate_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    rand::thread_rng().fill(&mut bytes);
    hex::encode(bytes)
}

#[must_use]
fn build_token(lookup: &str, secret: &str) -> String {
    format!("{TOKEN_PREFIX}_{lookup}_{secret}")
}

/// Splits a session token into (lookup, secret).
pub fn parse_session_token(token: &str) -> Result<(String, String)> {
    let rest = token
        .strip_prefix(TOKEN_PREFIX)
        .and_then(|r| r.strip_prefix('_'))
        .ok_or(Error::InvalidTokenFormat)?;

    let (lookup, secret) = rest.split_once('_').ok_or(Error::InvalidTokenFormat)?;

    if lookup.len() != LOOKUP_LENGTH || secret.len() != SECRET_LENGTH || secret.contains('_') {
        return Err(Error::InvalidTokenFormat);
    }

    Ok((lookup.to_string(), secret.to_string()))
}
