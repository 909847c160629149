// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const ROLE_STUDENT: &str = "STUDENT";
pub const ROLE_FACULTY: &str = "FACULTY";
pub const ROLE_ADMIN: &str = "ADMIN";

/// Column list matching `User`, for `SELECT` and `RETURNING` clauses.
pub const USER_COLUMNS: &str = "id, email, password, full_name, roll_number, role, created_at";

/// Faculty and admins may act on behalf of students.
pub fn is_staff(role: &str) -> bool {
    role == ROLE_FACULTY || role == ROLE_ADMIN
}

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique login e-mail.
    pub email: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    pub full_name: String,

    /// Institutional roll number, students only.
    pub roll_number: Option<String>,

    /// User role: 'STUDENT', 'FACULTY' or 'ADMIN'.
    pub role: String,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for student self-registration.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "A valid e-mail address is required."))]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Password length must be between 6 and 128 characters."
    ))]
    pub password: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Full name must be between 1 and 100 characters."
    ))]
    pub full_name: String,
    #[validate(length(min = 1, max = 32))]
    pub roll_number: Option<String>,
}

/// DTO for user login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 254))]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}
