// src/models/course.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'courses' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,

    /// Short unique code (e.g., "CS201").
    pub code: String,

    pub title: String,

    pub description: Option<String>,

    /// Owning faculty member, if any.
    pub faculty_id: Option<i64>,
}

/// Represents the 'topics' table. Topics group questions and are the unit of gap detection.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
}

/// DTO for creating a course.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 20))]
    pub code: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    pub faculty_id: Option<i64>,
}

/// DTO for creating a topic inside a course.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTopicRequest {
    pub course_id: i64,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}
