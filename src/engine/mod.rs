//! Assessment evaluation and knowledge gap detection.
//!
//! [`GapEngine::evaluate`] grades a submission, builds the per-topic breakdown,
//! records a gap for every topic under the mastery threshold and returns the
//! remediation content for those topics. All reads happen before the single
//! atomic write, so a rejected submission leaves nothing behind.

pub mod catalog;
pub mod error;
pub mod gaps;
pub mod memory;
pub mod scoring;

use std::collections::HashMap;

pub use catalog::{Catalog, EvaluationRecord, EvaluationStore};
pub use error::EvaluationError;
pub use gaps::MasteryPolicy;

use crate::models::{
    assessment::{AnswerSubmission, AssessmentResult, NewAssessment},
    knowledge_gap::KnowledgeGap,
};

pub struct GapEngine<C, S> {
    catalog: C,
    store: S,
    policy: MasteryPolicy,
}

impl<C, S> GapEngine<C, S>
where
    C: Catalog,
    S: EvaluationStore,
{
    pub fn new(catalog: C, store: S, policy: MasteryPolicy) -> Self {
        Self {
            catalog,
            store,
            policy,
        }
    }

    /// Scores one submission and records the outcome.
    ///
    /// * Rejects empty submissions, unknown students and unknown courses before touching storage.
    /// * Skips answers to unknown questions; if nothing is left to grade, rejects the submission.
    /// * Appends one assessment row plus one gap row per weak topic, in a single unit.
    pub async fn evaluate(
        &self,
        student_id: i64,
        course_id: i64,
        answers: &[AnswerSubmission],
    ) -> Result<AssessmentResult, EvaluationError> {
        if answers.is_empty() {
            tracing::warn!(student_id, course_id, "Rejected empty submission");
            return Err(EvaluationError::InvalidSubmission(
                "No answers submitted".to_string(),
            ));
        }

        if !self.catalog.student_exists(student_id).await? {
            return Err(EvaluationError::StudentNotFound(student_id));
        }
        if !self.catalog.course_exists(course_id).await? {
            return Err(EvaluationError::CourseNotFound(course_id));
        }

        let topics = self.catalog.topics_for_course(course_id).await?;

        let mut question_ids: Vec<i64> = answers.iter().map(|a| a.question_id).collect();
        question_ids.sort_unstable();
        question_ids.dedup();

        let keys: HashMap<i64, _> = self
            .catalog
            .answer_keys(&question_ids)
            .await?
            .into_iter()
            .map(|k| (k.id, k))
            .collect();

        let sheet = scoring::grade(answers, &keys);
        let percentage = sheet.percentage().ok_or_else(|| {
            tracing::warn!(
                student_id,
                course_id,
                submitted = answers.len(),
                "Rejected submission with no known questions"
            );
            EvaluationError::InvalidSubmission(
                "None of the submitted questions exist".to_string(),
            )
        })?;

        let breakdown = gaps::topic_breakdown(&topics, &sheet);
        let new_gaps = gaps::detect_gaps(student_id, &breakdown, &self.policy);

        let gap_topic_ids: Vec<i64> = new_gaps.iter().map(|g| g.topic_id).collect();
        // No gaps, no lookup
        let recommendations = if gap_topic_ids.is_empty() {
            Vec::new()
        } else {
            self.catalog
                .recommendations_for_topics(&gap_topic_ids)
                .await?
        };

        let record = self
            .store
            .record_evaluation(
                NewAssessment {
                    student_id,
                    course_id,
                    score: percentage,
                },
                new_gaps,
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to record evaluation: {}", e);
                e
            })?;

        tracing::info!(
            assessment_id = record.assessment.id,
            student_id,
            course_id,
            percentage,
            gaps = record.gaps.len(),
            "Assessment evaluated"
        );

        Ok(AssessmentResult {
            assessment_id: record.assessment.id,
            total_score: sheet.correct,
            max_score: sheet.answered,
            percentage,
            breakdown,
            gaps: record.gaps,
            recommendations,
        })
    }

    /// Every gap recorded for the student, oldest first, repeats included.
    pub async fn list_gaps(&self, student_id: i64) -> Result<Vec<KnowledgeGap>, EvaluationError> {
        self.store.gaps_for_student(student_id).await
    }
}
