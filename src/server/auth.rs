use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use uuid::Uuid;

use crate::auth::{RequireAuth, issue_session};
use crate::error::Error;
use crate::server::AppState;
use crate::server::dto::{
    CurrentSessionResponse, RegisterAdminRequest, SessionResponse, SignInRequest,
};
use crate::server::response::{ApiError, ApiResponse, StoreResultExt};
use crate::server::validation::{validate_email, validate_full_name, validate_password};
use crate::types::{Profile, Role};

pub fn auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin-register", post(register_admin))
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
        .route("/session", get(current_session))
}

pub async fn register_admin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterAdminRequest>,
) -> impl IntoResponse {
    if !state.allow_admin_registration {
        return Err(ApiError::forbidden("Admin registration is disabled"));
    }

    if req.password != req.confirm_password {
        return Err(ApiError::bad_request("Passwords do not match"));
    }
    validate_password(&req.password)?;
    let email = validate_email(&req.email)?;
    let full_name = validate_full_name(&req.full_name)?;

    let password_hash = state
        .hasher
        .hash_password(&req.password)
        .api_err("Failed to hash password")?;

    let now = Utc::now();
    let profile = Profile {
        id: Uuid::new_v4().to_string(),
        email,
        role: Role::Admin,
        full_name,
        password_hash,
        created_at: now,
        updated_at: now,
    };

    match state.store.create_profile(&profile) {
        Ok(()) => {}
        Err(Error::AlreadyExists) => return Err(ApiError::conflict("Email already registered")),
        Err(e) => {
            tracing::error!("Failed to create admin profile: {e}");
            return Err(ApiError::internal("Failed to create account"));
        }
    }

    tracing::info!(profile_id = %profile.id, "registered admin account");

    let (session, token) =
        issue_session(&state, &profile.id).api_err("Failed to create session")?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(SessionResponse {
            token,
            session,
            profile,
        })),
    ))
}

pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> impl IntoResponse {
    let invalid = || ApiError::unauthorized("Invalid email or password");

    let Some(profile) = state
        .store
        .get_profile_by_email(req.email.trim())
        .api_err("Failed to look up account")?
    else {
        state.hasher.verify_unknown_account(&req.password);
        return Err(invalid());
    };

    let matches = state
        .hasher
        .verify_password(&req.password, &profile.password_hash)
        .api_err("Failed to verify password")?;
    if !matches {
        return Err(invalid());
    }

    let (session, token) =
        issue_session(&state, &profile.id).api_err("Failed to create session")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(SessionResponse {
        token,
        session,
        profile,
    })))
}

pub async fn sign_out(auth: RequireAuth, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state
        .store
        .delete_session(&auth.session.id)
        .api_err("Failed to sign out")?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}

pub async fn current_session(auth: RequireAuth) -> impl IntoResponse {
    Json(ApiResponse::success(CurrentSessionResponse {
        session: auth.session,
        profile: auth.profile,
    }))
}
