// src/models/assessment.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::{knowledge_gap::KnowledgeGap, recommendation::Recommendation};

/// Represents the 'assessments' table in the database.
/// One row per evaluated submission; never updated.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Assessment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    /// Overall percentage, 0..=100.
    pub score: f64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Insert payload for an assessment; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssessment {
    pub student_id: i64,
    pub course_id: i64,
    pub score: f64,
}

/// A single answered question.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerSubmission {
    pub question_id: i64,
    /// Option label as picked by the learner. Anything other than the correct
    /// label (any case) is graded wrong, never rejected.
    pub selected_option: String,
}

impl AnswerSubmission {
    pub fn new(question_id: i64, selected_option: impl Into<String>) -> Self {
        Self {
            question_id,
            selected_option: selected_option.into(),
        }
    }
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub student_id: i64,
    pub course_id: i64,

    /// Ordered answers. Emptiness is rejected by the evaluator, not here.
    pub answers: Vec<AnswerSubmission>,
}

/// Per-topic correctness summary for one submission. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicBreakdown {
    pub topic_id: i64,
    pub topic_name: String,
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
}

/// Everything the caller gets back from one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResult {
    pub assessment_id: i64,
    /// Number of correct answers.
    pub total_score: usize,
    /// Number of graded answers (unknown questions excluded).
    pub max_score: usize,
    pub percentage: f64,
    pub breakdown: Vec<TopicBreakdown>,
    pub gaps: Vec<KnowledgeGap>,
    pub recommendations: Vec<Recommendation>,
}
