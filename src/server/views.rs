//! Page routes. Each path resolves to a view, the guard decides whether
//! the caller may open it, and disallowed callers get a `303 See Other`.

use std::sync::Arc;

use axum::{
    Json, Router,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use crate::auth::{Access, View, authorize, guard::HOME_PATH};
use crate::server::AppState;
use crate::server::dto::ViewResponse;
use crate::server::response::{ApiError, ApiResponse};
use crate::types::Caller;

pub fn view_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(open_view))
        .route("/login", get(open_view))
        .route("/admin-register", get(open_view))
        .route("/admin", get(open_view))
        .route("/teacher", get(open_view))
        .fallback(unknown_path)
}

fn view_name(view: View) -> &'static str {
    match view {
        View::Login => "login",
        View::AdminRegister => "admin-register",
        View::PublicSchedule => "public-schedule",
        View::AdminDashboard => "admin-dashboard",
        View::TeacherDashboard => "teacher-dashboard",
    }
}

async fn open_view(caller: Caller, uri: Uri) -> Response {
    let Some(view) = View::resolve(uri.path()) else {
        return Redirect::to(HOME_PATH).into_response();
    };

    match authorize(view, &caller) {
        Access::Allow => Json(ApiResponse::success(ViewResponse {
            view: view_name(view),
            role: caller.role_name(),
            profile: caller.profile().cloned(),
        }))
        .into_response(),
        Access::Redirect(to) => {
            tracing::debug!(
                path = view.path(),
                role = caller.role_name(),
                to,
                "view redirected"
            );
            Redirect::to(to).into_response()
        }
    }
}

/// Unknown API paths are 404s. Other paths still go through the guard, so
/// `/admin/` is treated as `/admin` and anything unresolvable goes home.
async fn unknown_path(caller: Caller, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return ApiError::not_found("Not found").into_response();
    }
    open_view(caller, uri).await
}
