//! Handlers for the student resource.
//!
//! Each handler is one operation: it either succeeds with a fixed message
//! (or the listing), reports a missing student as 404, or collapses any
//! other failure into the operation's fixed 500 body.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use enrollment_core::error::CoreError;
use enrollment_core::types::DbId;
use enrollment_db::models::student::{CreateStudent, UpdateStudentEmail};
use enrollment_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult, Operation, OperationResultExt};
use crate::response::{MessageResponse, StudentListResponse};
use crate::state::AppState;

/// POST /students
///
/// Create a student. The created row is not echoed back.
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudent>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let op = Operation::CreateStudent;
    let Json(input) = payload.during(op)?;

    let student = StudentRepo::create(&state.pool, &input).await.during(op)?;

    tracing::info!(student_id = student.student_id, "Student created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("student created")),
    ))
}

/// GET /students
///
/// List every student, in storage order.
pub async fn list_students(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = StudentRepo::list(&state.pool)
        .await
        .during(Operation::ListStudents)?;

    Ok(Json(StudentListResponse { students }))
}

/// PUT /students/{id}
///
/// Replace a student's email. No other field can change here.
pub async fn update_student_email(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateStudentEmail>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let op = Operation::UpdateStudentEmail;
    let Path(student_id) = path?;

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            // The id lookup comes before the body: unknown ids stay 404.
            StudentRepo::find_by_id(&state.pool, student_id)
                .await
                .during(op)?
                .ok_or_else(|| CoreError::student_not_found(student_id))?;
            return Err(AppError::failed(op, rejection));
        }
    };

    StudentRepo::update_email(&state.pool, student_id, &input.email)
        .await
        .during(op)?
        .ok_or_else(|| CoreError::student_not_found(student_id))?;

    tracing::info!(student_id, "Student email updated");

    Ok(Json(MessageResponse::new("student email updated")))
}

/// DELETE /students/{id}
///
/// Permanently remove a student.
pub async fn delete_student(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(student_id) = path?;

    let deleted = StudentRepo::delete(&state.pool, student_id)
        .await
        .during(Operation::DeleteStudent)?;

    if !deleted {
        return Err(CoreError::student_not_found(student_id).into());
    }

    tracing::info!(student_id, "Student deleted");

    Ok(Json(MessageResponse::new("student deleted")))
}
