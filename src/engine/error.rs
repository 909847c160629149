// src/engine/error.rs

/// Everything an evaluation can fail with.
/// Unknown question ids are not here: they are skipped, not reported.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("Student {0} not found")]
    StudentNotFound(i64),

    #[error("Course {0} not found")]
    CourseNotFound(i64),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for EvaluationError {
    fn from(err: sqlx::Error) -> Self {
        EvaluationError::Storage(err.to_string())
    }
}
