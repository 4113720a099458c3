//! Student model and DTOs.

use chrono::NaiveDate;
use enrollment_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table.
///
/// `enrollment_date` serializes as an ISO-8601 date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Student {
    pub student_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
}

/// DTO for creating a new student. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
}

/// DTO for the email-only update. Other fields in the body are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentEmail {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_serializes_date_as_iso_string() {
        let student = Student {
            student_id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        };

        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["student_id"], 1);
        assert_eq!(json["enrollment_date"], "2024-09-01");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn create_dto_rejects_missing_field() {
        let result: Result<CreateStudent, _> = serde_json::from_value(serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "enrollment_date": "2024-09-01",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_dto_rejects_malformed_date() {
        let result: Result<CreateStudent, _> = serde_json::from_value(serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "enrollment_date": "09/01/2024",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn update_dto_ignores_extra_fields() {
        let dto: UpdateStudentEmail = serde_json::from_value(serde_json::json!({
            "email": "new@example.com",
            "first_name": "Ignored",
        }))
        .unwrap();
        assert_eq!(dto.email, "new@example.com");
    }
}
