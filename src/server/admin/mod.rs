mod classes;
mod overview;
mod schedules;
mod subjects;
mod teachers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::server::AppState;

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/overview", get(overview::get_overview))
        // Class routes
        .route(
            "/classes",
            post(classes::create_class).get(classes::list_classes),
        )
        .route(
            "/classes/{id}",
            get(classes::get_class)
                .patch(classes::update_class)
                .delete(classes::delete_class),
        )
        // Subject routes
        .route(
            "/subjects",
            post(subjects::create_subject).get(subjects::list_subjects),
        )
        .route(
            "/subjects/{id}",
            get(subjects::get_subject)
                .patch(subjects::update_subject)
                .delete(subjects::delete_subject),
        )
        // Teacher routes
        .route(
            "/teachers",
            post(teachers::create_teacher).get(teachers::list_teachers),
        )
        .route(
            "/teachers/{id}",
            get(teachers::get_teacher)
                .patch(teachers::update_teacher)
                .delete(teachers::delete_teacher),
        )
        // Schedule routes
        .route(
            "/schedules",
            post(schedules::create_schedule).get(schedules::list_schedules),
        )
        .route(
            "/schedules/{id}",
            get(schedules::get_schedule)
                .patch(schedules::update_schedule)
                .delete(schedules::delete_schedule),
        )
}
