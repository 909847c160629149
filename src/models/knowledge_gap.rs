// src/models/knowledge_gap.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'knowledge_gaps' table.
/// Append-only: every failing evaluation adds a row, even for a topic already on record.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct KnowledgeGap {
    pub id: i64,
    pub student_id: i64,
    pub topic_id: i64,
    /// The topic percentage that fell below the mastery threshold.
    pub weakness_score: f64,
    pub detected_at: chrono::DateTime<chrono::Utc>,
}

/// Insert payload for a gap; `detected_at` is stamped by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewKnowledgeGap {
    pub student_id: i64,
    pub topic_id: i64,
    pub weakness_score: f64,
}
