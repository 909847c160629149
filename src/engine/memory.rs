//! In-memory catalog and store.
//!
//! Backs the evaluator in tests without a database. Clones share state, so a
//! test can keep a handle and inspect what an evaluation wrote.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    engine::{Catalog, EvaluationError, EvaluationRecord, EvaluationStore},
    models::{
        assessment::{Assessment, NewAssessment},
        course::Topic,
        knowledge_gap::{KnowledgeGap, NewKnowledgeGap},
        question::AnswerKey,
        recommendation::{MediaType, Recommendation},
    },
};

#[derive(Default)]
struct MemoryState {
    students: HashSet<i64>,
    courses: HashSet<i64>,
    topics: Vec<Topic>,
    answer_keys: Vec<AnswerKey>,
    recommendations: Vec<Recommendation>,
    assessments: Vec<Assessment>,
    gaps: Vec<KnowledgeGap>,
    recommendation_lookups: usize,
    fail_writes: bool,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_student(&self, student_id: i64) {
        self.state.write().await.students.insert(student_id);
    }

    pub async fn add_course(&self, course_id: i64) {
        self.state.write().await.courses.insert(course_id);
    }

    pub async fn add_topic(&self, id: i64, course_id: i64, name: &str) {
        self.state.write().await.topics.push(Topic {
            id,
            course_id,
            name: name.to_string(),
        });
    }

    pub async fn add_question(&self, id: i64, topic_id: i64, correct_option: &str) {
        self.state.write().await.answer_keys.push(AnswerKey {
            id,
            topic_id,
            correct_option: correct_option.to_string(),
        });
    }

    pub async fn add_recommendation(
        &self,
        id: i64,
        topic_id: i64,
        url: &str,
        media_type: MediaType,
    ) {
        self.state.write().await.recommendations.push(Recommendation {
            id,
            topic_id,
            url: url.to_string(),
            description: String::new(),
            media_type,
        });
    }

    /// Makes every subsequent write fail without storing anything.
    pub async fn fail_writes(&self, fail: bool) {
        self.state.write().await.fail_writes = fail;
    }

    pub async fn assessments(&self) -> Vec<Assessment> {
        self.state.read().await.assessments.clone()
    }

    pub async fn gaps(&self) -> Vec<KnowledgeGap> {
        self.state.read().await.gaps.clone()
    }

    /// How many times the evaluator asked for recommendations.
    pub async fn recommendation_lookups(&self) -> usize {
        self.state.read().await.recommendation_lookups
    }
}

#[async_trait]
impl Catalog for InMemoryStore {
    async fn student_exists(&self, student_id: i64) -> Result<bool, EvaluationError> {
        Ok(self.state.read().await.students.contains(&student_id))
    }

    async fn course_exists(&self, course_id: i64) -> Result<bool, EvaluationError> {
        Ok(self.state.read().await.courses.contains(&course_id))
    }

    async fn topics_for_course(&self, course_id: i64) -> Result<Vec<Topic>, EvaluationError> {
        let state = self.state.read().await;
        Ok(state
            .topics
            .iter()
            .filter(|t| t.course_id == course_id)
            .cloned()
            .collect())
    }

    async fn answer_keys(&self, question_ids: &[i64]) -> Result<Vec<AnswerKey>, EvaluationError> {
        let state = self.state.read().await;
        Ok(state
            .answer_keys
            .iter()
            .filter(|k| question_ids.contains(&k.id))
            .cloned()
            .collect())
    }

    async fn recommendations_for_topics(
        &self,
        topic_ids: &[i64],
    ) -> Result<Vec<Recommendation>, EvaluationError> {
        let mut state = self.state.write().await;
        state.recommendation_lookups += 1;
        Ok(state
            .recommendations
            .iter()
            .filter(|r| topic_ids.contains(&r.topic_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl EvaluationStore for InMemoryStore {
    async fn record_evaluation(
        &self,
        assessment: NewAssessment,
        gaps: Vec<NewKnowledgeGap>,
    ) -> Result<EvaluationRecord, EvaluationError> {
        // One write guard for the whole record keeps it atomic.
        let mut state = self.state.write().await;
        if state.fail_writes {
            return Err(EvaluationError::Storage("simulated write failure".to_string()));
        }

        let now = Utc::now();
        let assessment = Assessment {
            id: state.assessments.len() as i64 + 1,
            student_id: assessment.student_id,
            course_id: assessment.course_id,
            score: assessment.score,
            submitted_at: now,
        };
        state.assessments.push(assessment.clone());

        let mut stored = Vec::with_capacity(gaps.len());
        for gap in gaps {
            let gap = KnowledgeGap {
                id: state.gaps.len() as i64 + 1,
                student_id: gap.student_id,
                topic_id: gap.topic_id,
                weakness_score: gap.weakness_score,
                detected_at: now,
            };
            state.gaps.push(gap.clone());
            stored.push(gap);
        }

        Ok(EvaluationRecord {
            assessment,
            gaps: stored,
        })
    }

    async fn gaps_for_student(&self, student_id: i64) -> Result<Vec<KnowledgeGap>, EvaluationError> {
        let state = self.state.read().await;
        Ok(state
            .gaps
            .iter()
            .filter(|g| g.student_id == student_id)
            .cloned()
            .collect())
    }
}
