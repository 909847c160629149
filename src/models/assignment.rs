use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_COMPLETED: &str = "COMPLETED";

/// Represents the 'assignments' table: a topic a faculty member asked a student to revisit.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub topic_id: i64,
    pub student_id: i64,
    pub assigned_by: Option<i64>,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
    pub status: String, // 'PENDING' or 'COMPLETED'
}

/// DTO for assigning one topic to several students.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    pub topic_id: i64,
    #[validate(length(min = 1, max = 200, message = "Select between 1 and 200 students"))]
    pub student_ids: Vec<i64>,
}

/// DTO for closing a student's pending assignments on one topic,
/// typically right after they were assessed on it.
#[derive(Debug, Deserialize)]
pub struct CompleteTopicRequest {
    pub topic_id: i64,
    pub student_id: i64,
}

/// Query parameters for listing the caller's assignments.
#[derive(Debug, Deserialize)]
pub struct AssignmentListParams {
    /// 'pending' or 'completed'; omit for all.
    pub status: Option<String>,
}

impl AssignmentListParams {
    /// Normalizes the filter to the stored status value.
    pub fn status_filter(&self) -> Result<Option<&'static str>, String> {
        match self.status.as_deref().map(str::to_ascii_uppercase).as_deref() {
            None => Ok(None),
            Some(STATUS_PENDING) => Ok(Some(STATUS_PENDING)),
            Some(STATUS_COMPLETED) => Ok(Some(STATUS_COMPLETED)),
            Some(other) => Err(format!("Unknown assignment status '{}'", other)),
        }
    }
}
