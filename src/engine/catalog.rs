//! Seams between the evaluator and whatever holds the data.
//!
//! The evaluator only reads through [`Catalog`] and only writes through
//! [`EvaluationStore`], so it can run against Postgres or an in-memory fake.

use async_trait::async_trait;

use crate::{
    engine::EvaluationError,
    models::{
        assessment::{Assessment, NewAssessment},
        course::Topic,
        knowledge_gap::{KnowledgeGap, NewKnowledgeGap},
        question::AnswerKey,
        recommendation::Recommendation,
    },
};

/// Read-only reference data consulted during an evaluation.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn student_exists(&self, student_id: i64) -> Result<bool, EvaluationError>;

    async fn course_exists(&self, course_id: i64) -> Result<bool, EvaluationError>;

    /// Topics of a course in catalog order.
    async fn topics_for_course(&self, course_id: i64) -> Result<Vec<Topic>, EvaluationError>;

    /// Answer keys for the given question ids. Ids with no question are simply absent.
    async fn answer_keys(&self, question_ids: &[i64]) -> Result<Vec<AnswerKey>, EvaluationError>;

    /// All recommendations attached to any of the topics, in catalog order.
    async fn recommendations_for_topics(
        &self,
        topic_ids: &[i64],
    ) -> Result<Vec<Recommendation>, EvaluationError>;
}

/// What one evaluation wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRecord {
    pub assessment: Assessment,
    pub gaps: Vec<KnowledgeGap>,
}

/// Insert-only sink for evaluation output.
#[async_trait]
pub trait EvaluationStore: Send + Sync {
    /// Persists the assessment and its gaps as one unit. Either all rows land or none do.
    async fn record_evaluation(
        &self,
        assessment: NewAssessment,
        gaps: Vec<NewKnowledgeGap>,
    ) -> Result<EvaluationRecord, EvaluationError>;

    /// Every gap ever detected for the student, oldest first.
    async fn gaps_for_student(&self, student_id: i64) -> Result<Vec<KnowledgeGap>, EvaluationError>;
}
