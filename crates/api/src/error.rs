use std::fmt;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use enrollment_core::error::CoreError;

use crate::response::MessageResponse;

/// One student operation. Each owns a fixed failure message that is the
/// only thing a caller learns about any failure inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateStudent,
    ListStudents,
    UpdateStudentEmail,
    DeleteStudent,
}

impl Operation {
    /// Body message returned with the 500 response for this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::CreateStudent => "error creating student",
            Operation::ListStudents => "error getting students",
            Operation::UpdateStudentEmail => "error updating student email",
            Operation::DeleteStudent => "error deleting student",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::CreateStudent => "create student",
            Operation::ListStudents => "list students",
            Operation::UpdateStudentEmail => "update student email",
            Operation::DeleteStudent => "delete student",
        };
        f.write_str(name)
    }
}

/// Why an operation failed. Logged server-side, never sent to the caller.
#[derive(Debug, thiserror::Error)]
pub enum FailureCause {
    /// The request body was missing, malformed, or did not match the DTO.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// A database error from sqlx, including constraint violations.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<JsonRejection> for FailureCause {
    fn from(rejection: JsonRejection) -> Self {
        FailureCause::InvalidBody(rejection.body_text())
    }
}

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{ "message": ... }` bodies:
/// 404 for missing rows and unmatched routes, 500 with the operation's
/// fixed message for everything else.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `enrollment_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any failure while carrying out an operation.
    #[error("Failed to {op}: {cause}")]
    OperationFailed {
        op: Operation,
        #[source]
        cause: FailureCause,
    },

    /// No route matches the request path.
    #[error("No route matches the request")]
    RouteNotFound,
}

impl AppError {
    pub fn failed(op: Operation, cause: impl Into<FailureCause>) -> Self {
        AppError::OperationFailed {
            op,
            cause: cause.into(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Path parameter did not match route");
        AppError::RouteNotFound
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Attach the running operation to a fallible step.
pub trait OperationResultExt<T> {
    fn during(self, op: Operation) -> AppResult<T>;
}

impl<T, E> OperationResultExt<T> for Result<T, E>
where
    E: Into<FailureCause>,
{
    fn during(self, op: Operation) -> AppResult<T> {
        self.map_err(|err| AppError::failed(op, err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Lookup found no matching row");
                (StatusCode::NOT_FOUND, MessageResponse::new(format!("{entity} not found")))
            }
            AppError::OperationFailed { op, cause } => {
                log_failure(*op, cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageResponse::new(op.failure_message()),
                )
            }
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, MessageResponse::new("route not found")),
        };

        (status, Json(message)).into_response()
    }
}

/// Log an operation failure at a level matching its cause.
///
/// - Request body problems log at `warn`.
/// - Unique constraint violations (PostgreSQL `23505`) log at `warn` with the constraint name.
/// - Everything else logs at `error`.
fn log_failure(op: Operation, cause: &FailureCause) {
    match cause {
        FailureCause::InvalidBody(msg) => {
            tracing::warn!(%op, error = %msg, "Rejected request body");
        }
        FailureCause::Database(sqlx::Error::Database(db_err))
            if db_err.code().as_deref() == Some("23505") =>
        {
            let constraint = db_err.constraint().unwrap_or("unknown");
            tracing::warn!(%op, constraint, "Duplicate value violates unique constraint");
        }
        FailureCause::Database(err) => {
            tracing::error!(%op, error = %err, "Database error");
        }
    }
}
