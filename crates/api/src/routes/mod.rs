pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /test                  liveness (GET)
/// /health                readiness with database probe (GET)
///
/// /students              list, create (GET, POST)
/// /students/{id}         update email, delete (PUT, DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(student::router())
}
