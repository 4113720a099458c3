//! Route definitions for the student resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Student routes.
///
/// ```text
/// GET    /students        -> list_students
/// POST   /students        -> create_student
/// PUT    /students/{id}   -> update_student_email
/// DELETE /students/{id}   -> delete_student
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            get(student::list_students).post(student::create_student),
        )
        .route(
            "/students/{id}",
            put(student::update_student_email).delete(student::delete_student),
        )
}
