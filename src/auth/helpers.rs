use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::parse_session_token;
use crate::error::{Error, Result};
use crate::server::AppState;
use crate::types::{Profile, Session};

const MAX_LOOKUP_RETRIES: u32 = 3;

#[derive(Debug)]
pub enum SessionValidationError {
    InvalidScheme,
    InvalidToken,
    SessionExpired,
    InternalError,
}

pub struct ValidatedSession {
    pub session: Session,
    pub profile: Profile,
}

/// Extracts the token from a Bearer authorization header.
/// Returns None if no auth header is present.
/// Returns Err if the auth scheme is unsupported.
pub fn extract_bearer_token(
    auth_header: Option<&str>,
) -> std::result::Result<Option<String>, SessionValidationError> {
    match auth_header {
        Some(header) => header
            .strip_prefix("Bearer ")
            .map(|token| Some(token.trim().to_string()))
            .ok_or(SessionValidationError::InvalidScheme),
        None => Ok(None),
    }
}

/// Resolves a raw session token to its session and profile.
pub fn validate_session(
    state: &Arc<AppState>,
    raw_token: &str,
) -> std::result::Result<ValidatedSession, SessionValidationError> {
    let (lookup, _secret) =
        parse_session_token(raw_token).map_err(|_| SessionValidationError::InvalidToken)?;

    let session = state
        .store
        .get_session_by_lookup(&lookup)
        .map_err(|_| SessionValidationError::InternalError)?
        .ok_or(SessionValidationError::InvalidToken)?;

    if !state
        .hasher
        .verify_session_token(raw_token, &session.token_hash)
        .map_err(|_| SessionValidationError::InternalError)?
    {
        return Err(SessionValidationError::InvalidToken);
    }

    if let Some(expires_at) = &session.expires_at {
        if expires_at < &Utc::now() {
            if let Err(e) = state.store.delete_session(&session.id) {
                tracing::warn!("Failed to delete expired session: {e}");
            }
            return Err(SessionValidationError::SessionExpired);
        }
    }

    let profile = state
        .store
        .get_profile(&session.profile_id)
        .map_err(|_| SessionValidationError::InternalError)?
        .ok_or(SessionValidationError::InvalidToken)?;

    if let Err(e) = state.store.update_session_last_used(&session.id) {
        tracing::warn!("Failed to update session last_used_at: {e}");
    }

    Ok(ValidatedSession { session, profile })
}

/// Creates a session for `profile_id` and returns it with the raw token,
/// which is never stored.
pub fn issue_session(state: &AppState, profile_id: &str) -> Result<(Session, String)> {
    let expires_at = state
        .session_ttl
        .map(|ttl| {
            Utc::now()
                .checked_add_signed(ttl)
                .ok_or_else(|| Error::Config("session lifetime out of range".to_string()))
        })
        .transpose()?;

    for _ in 0..MAX_LOOKUP_RETRIES {
        let (raw_token, lookup, hash) = state.hasher.generate_session_token()?;

        let session = Session {
            id: Uuid::new_v4().to_string(),
            token_hash: hash,
            token_lookup: lookup,
            profile_id: profile_id.to_string(),
            created_at: Utc::now(),
            expires_at,
            last_used_at: None,
        };

        match state.store.create_session(&session) {
            Ok(()) => return Ok((session, raw_token)),
            Err(Error::TokenLookupCollision) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(Error::TokenLookupCollision)
}
