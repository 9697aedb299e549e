use std::sync::Arc;

use axum::{
    Json,
    extract::FromRequestParts,
    http::{
        HeaderValue, StatusCode, header::AUTHORIZATION, header::WWW_AUTHENTICATE, request::Parts,
    },
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::helpers::{
    SessionValidationError, ValidatedSession, extract_bearer_token, validate_session,
};
use crate::server::AppState;
use crate::types::{Caller, Profile, Role, Session};

/// Extractor that requires any signed-in profile
pub struct RequireAuth {
    pub session: Session,
    pub profile: Profile,
}

/// Extractor that requires an admin profile
pub struct RequireAdmin {
    pub session: Session,
    pub profile: Profile,
}

/// Extractor that requires a teacher profile
pub struct RequireTeacher {
    pub session: Session,
    pub profile: Profile,
}

#[derive(Debug)]
pub enum AuthError {
    MissingAuth,
    InvalidScheme,
    InvalidToken,
    SessionExpired,
    NotAdmin,
    NotTeacher,
    InternalError,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingAuth => (StatusCode::UNAUTHORIZED, "Authentication required"),
            AuthError::InvalidScheme => (StatusCode::UNAUTHORIZED, "Invalid authorization scheme"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid session token"),
            AuthError::SessionExpired => (StatusCode::UNAUTHORIZED, "Session expired"),
            AuthError::NotAdmin => (StatusCode::FORBIDDEN, "Admin access required"),
            AuthError::NotTeacher => (StatusCode::FORBIDDEN, "Teacher access required"),
            AuthError::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = json!({ "data": null, "error": message });

        let mut response = (status, Json(body)).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer realm=\"timegrid\""),
            );
        }

        response
    }
}

impl From<SessionValidationError> for AuthError {
    fn from(e: SessionValidationError) -> Self {
        match e {
            SessionValidationError::InvalidScheme => AuthError::InvalidScheme,
            SessionValidationError::InvalidToken => AuthError::InvalidToken,
            SessionValidationError::SessionExpired => AuthError::SessionExpired,
            SessionValidationError::InternalError => AuthError::InternalError,
        }
    }
}

impl FromRequestParts<Arc<AppState>> for RequireAuth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let validated = extract_and_validate_session(parts, state)?;
        Ok(RequireAuth {
            session: validated.session,
            profile: validated.profile,
        })
    }
}

impl FromRequestParts<Arc<AppState>> for RequireAdmin {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let validated = extract_and_validate_session(parts, state)?;

        if validated.profile.role != Role::Admin {
            return Err(AuthError::NotAdmin);
        }

        Ok(RequireAdmin {
            session: validated.session,
            profile: validated.profile,
        })
    }
}

impl FromRequestParts<Arc<AppState>> for RequireTeacher {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let validated = extract_and_validate_session(parts, state)?;

        if validated.profile.role != Role::Teacher {
            return Err(AuthError::NotTeacher);
        }

        Ok(RequireTeacher {
            session: validated.session,
            profile: validated.profile,
        })
    }
}

/// Resolves the caller without rejecting guests. A missing, malformed or
/// expired token yields `Caller::Guest`; only store failures are errors.
impl FromRequestParts<Arc<AppState>> for Caller {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        match extract_and_validate_session(parts, state) {
            Ok(validated) => Ok(Caller::from_profile(validated.profile)),
            Err(AuthError::InternalError) => Err(AuthError::InternalError),
            Err(_) => Ok(Caller::Guest),
        }
    }
}

fn extract_and_validate_session(
    parts: &Parts,
    state: &Arc<AppState>,
) -> Result<ValidatedSession, AuthError> {
    let auth_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let raw_token = extract_bearer_token(auth_header)?.ok_or(AuthError::MissingAuth)?;

    Ok(validate_session(state, &raw_token)?)
}
