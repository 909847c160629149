// src/handlers/catalog.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{
        course::{Course, Topic},
        question::{PublicQuestion, Question},
        recommendation::Recommendation,
    },
};

/// Lists all courses.
pub async fn list_courses(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let courses = sqlx::query_as::<_, Course>(
        "SELECT id, code, title, description, faculty_id FROM courses ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(courses))
}

async fn ensure_course(pool: &PgPool, course_id: i64) -> Result<(), AppError> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM courses WHERE id = $1")
        .bind(course_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Course not found".to_string()))?;
    Ok(())
}

/// Lists the topics of a course in catalog order.
pub async fn list_course_topics(
    State(pool): State<PgPool>,
    Path(course_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ensure_course(&pool, course_id).await?;

    let topics = sqlx::query_as::<_, Topic>(
        "SELECT id, course_id, name FROM topics WHERE course_id = $1 ORDER BY id",
    )
    .bind(course_id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(topics))
}

/// Lists the questions of a course for a learner to answer.
/// The correct option is stripped by mapping to `PublicQuestion`.
pub async fn list_course_questions(
    State(pool): State<PgPool>,
    Path(course_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ensure_course(&pool, course_id).await?;

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT q.id, q.topic_id, q.content, q.option_a, q.option_b, q.option_c, q.option_d,
               q.correct_option, q.difficulty
        FROM questions q
        JOIN topics t ON q.topic_id = t.id
        WHERE t.course_id = $1
        ORDER BY t.id, q.id
        "#,
    )
    .bind(course_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch course questions: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let public_questions: Vec<PublicQuestion> =
        questions.into_iter().map(PublicQuestion::from).collect();

    Ok(Json(public_questions))
}

/// Fetches one topic.
pub async fn get_topic(
    State(pool): State<PgPool>,
    Path(topic_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let topic = sqlx::query_as::<_, Topic>("SELECT id, course_id, name FROM topics WHERE id = $1")
        .bind(topic_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Topic not found".to_string()))?;

    Ok(Json(topic))
}

/// Lists the questions of one topic, without the correct option.
pub async fn list_topic_questions(
    State(pool): State<PgPool>,
    Path(topic_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM topics WHERE id = $1")
        .bind(topic_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Topic not found".to_string()))?;

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, topic_id, content, option_a, option_b, option_c, option_d,
               correct_option, difficulty
        FROM questions
        WHERE topic_id = $1
        ORDER BY id
        "#,
    )
    .bind(topic_id)
    .fetch_all(&pool)
    .await?;

    let public_questions: Vec<PublicQuestion> =
        questions.into_iter().map(PublicQuestion::from).collect();

    Ok(Json(public_questions))
}

/// Lists the remediation content attached to a topic.
pub async fn list_topic_recommendations(
    State(pool): State<PgPool>,
    Path(topic_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let recommendations = sqlx::query_as::<_, Recommendation>(
        r#"
        SELECT id, topic_id, url, description, media_type
        FROM recommendations
        WHERE topic_id = $1
        ORDER BY id
        "#,
    )
    .bind(topic_id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(recommendations))
}
