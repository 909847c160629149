// src/models/question.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Valid option labels, either case. Stored upper-case.
static OPTION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Da-d]$").expect("option label pattern is valid"));

const DIFFICULTIES: [&str; 3] = ["EASY", "MEDIUM", "HARD"];

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    pub topic_id: i64,

    /// The text content of the question.
    pub content: String,

    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,

    /// The correct option label ('A'..'D').
    pub correct_option: String,

    /// 'EASY', 'MEDIUM' or 'HARD'.
    pub difficulty: String,
}

/// DTO for sending question to client (excludes the correct option).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub topic_id: i64,
    pub content: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub difficulty: String,
}

impl From<Question> for PublicQuestion {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            topic_id: q.topic_id,
            content: q.content,
            option_a: q.option_a,
            option_b: q.option_b,
            option_c: q.option_c,
            option_d: q.option_d,
            difficulty: q.difficulty,
        }
    }
}

/// The slice of a question the scorer needs: which topic it belongs to and what is correct.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AnswerKey {
    pub id: i64,
    pub topic_id: i64,
    pub correct_option: String,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    pub topic_id: i64,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    #[validate(length(min = 1, max = 500))]
    pub option_a: String,
    #[validate(length(min = 1, max = 500))]
    pub option_b: String,
    #[validate(length(min = 1, max = 500))]
    pub option_c: String,
    #[validate(length(min = 1, max = 500))]
    pub option_d: String,
    #[validate(regex(path = *OPTION_LABEL, message = "correct_option must be one of A, B, C, D"))]
    pub correct_option: String,
    #[validate(custom(function = validate_difficulty))]
    pub difficulty: String,
}

fn validate_difficulty(difficulty: &str) -> Result<(), validator::ValidationError> {
    if !DIFFICULTIES.contains(&difficulty.to_ascii_uppercase().as_str()) {
        return Err(validator::ValidationError::new("invalid_difficulty"));
    }
    Ok(())
}
