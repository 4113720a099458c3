//! Repository for the `students` table.
//!
//! Update and delete are single statements, so the id lookup and the
//! mutation happen atomically.

use sqlx::PgPool;
use enrollment_core::types::DbId;

use crate::models::student::{CreateStudent, Student};

/// Column list for `students` queries.
const COLUMNS: &str = "student_id, first_name, last_name, email, enrollment_date";

/// Provides data access for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student. Storage assigns `student_id`.
    pub async fn create(pool: &PgPool, dto: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (first_name, last_name, email, enrollment_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&dto.email)
            .bind(dto.enrollment_date)
            .fetch_one(pool)
            .await
    }

    /// List every student in storage order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Find a student by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE student_id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the email of a student.
    ///
    /// Returns `None` if no student has this ID.
    pub async fn update_email(
        pool: &PgPool,
        id: DbId,
        email: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET email = $2 \
             WHERE student_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
