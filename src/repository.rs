// src/repository.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    engine::{Catalog, EvaluationError, EvaluationRecord, EvaluationStore},
    models::{
        assessment::{Assessment, NewAssessment},
        course::Topic,
        knowledge_gap::{KnowledgeGap, NewKnowledgeGap},
        question::AnswerKey,
        recommendation::Recommendation,
    },
};

/// Postgres-backed catalog and evaluation store.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for PgRepository {
    async fn student_exists(&self, student_id: i64) -> Result<bool, EvaluationError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(student_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn course_exists(&self, course_id: i64) -> Result<bool, EvaluationError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
                .bind(course_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn topics_for_course(&self, course_id: i64) -> Result<Vec<Topic>, EvaluationError> {
        let topics = sqlx::query_as::<_, Topic>(
            "SELECT id, course_id, name FROM topics WHERE course_id = $1 ORDER BY id",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(topics)
    }

    async fn answer_keys(&self, question_ids: &[i64]) -> Result<Vec<AnswerKey>, EvaluationError> {
        if question_ids.is_empty() {
            return Ok(Vec::new());
        }

        // Dynamic IN clause over the submitted ids
        let mut query_builder = QueryBuilder::<Postgres>::new(
            "SELECT id, topic_id, correct_option FROM questions WHERE id IN (",
        );

        let mut separated = query_builder.separated(",");
        for id in question_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let keys = query_builder
            .build_query_as::<AnswerKey>()
            .fetch_all(&self.pool)
            .await?;
        Ok(keys)
    }

    async fn recommendations_for_topics(
        &self,
        topic_ids: &[i64],
    ) -> Result<Vec<Recommendation>, EvaluationError> {
        if topic_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query_builder = QueryBuilder::<Postgres>::new(
            "SELECT id, topic_id, url, description, media_type FROM recommendations WHERE topic_id IN (",
        );

        let mut separated = query_builder.separated(",");
        for id in topic_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");

        let recommendations = query_builder
            .build_query_as::<Recommendation>()
            .fetch_all(&self.pool)
            .await?;
        Ok(recommendations)
    }
}

#[async_trait]
impl EvaluationStore for PgRepository {
    async fn record_evaluation(
        &self,
        assessment: NewAssessment,
        gaps: Vec<NewKnowledgeGap>,
    ) -> Result<EvaluationRecord, EvaluationError> {
        // Dropping `tx` on any early return rolls everything back.
        let mut tx = self.pool.begin().await?;

        let assessment = sqlx::query_as::<_, Assessment>(
            r#"
            INSERT INTO assessments (student_id, course_id, score)
            VALUES ($1, $2, $3)
            RETURNING id, student_id, course_id, score, submitted_at
            "#,
        )
        .bind(assessment.student_id)
        .bind(assessment.course_id)
        .bind(assessment.score)
        .fetch_one(&mut *tx)
        .await?;

        let mut stored = Vec::with_capacity(gaps.len());
        for gap in gaps {
            let gap = sqlx::query_as::<_, KnowledgeGap>(
                r#"
                INSERT INTO knowledge_gaps (student_id, topic_id, weakness_score)
                VALUES ($1, $2, $3)
                RETURNING id, student_id, topic_id, weakness_score, detected_at
                "#,
            )
            .bind(gap.student_id)
            .bind(gap.topic_id)
            .bind(gap.weakness_score)
            .fetch_one(&mut *tx)
            .await?;
            stored.push(gap);
        }

        tx.commit().await?;

        Ok(EvaluationRecord {
            assessment,
            gaps: stored,
        })
    }

    async fn gaps_for_student(&self, student_id: i64) -> Result<Vec<KnowledgeGap>, EvaluationError> {
        let gaps = sqlx::query_as::<_, KnowledgeGap>(
            r#"
            SELECT id, student_id, topic_id, weakness_score, detected_at
            FROM knowledge_gaps
            WHERE student_id = $1
            ORDER BY id
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(gaps)
    }
}
