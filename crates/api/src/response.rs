//! Response envelope types for API handlers.
//!
//! Every non-listing response is a bare `{ "message": ... }` object; the
//! listing wraps its rows as `{ "students": [...] }`.

use std::borrow::Cow;

use enrollment_db::models::student::Student;
use serde::Serialize;

/// `{ "message": ... }` body shared by success, not-found, and failure responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: Cow<'static, str>,
}

impl MessageResponse {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "students": [...] }` body returned by the listing.
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
}
