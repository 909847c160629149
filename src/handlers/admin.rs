// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        assignment::{Assignment, CreateAssignmentRequest},
        course::{Course, CreateCourseRequest, CreateTopicRequest, Topic},
        question::{CreateQuestionRequest, Question},
        recommendation::{CreateRecommendationRequest, Recommendation},
    },
    utils::{
        html::{clean_html, clean_optional},
        jwt::Claims,
    },
};

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.to_string().contains("unique constraint") || e.to_string().contains("23505")
}

async fn ensure_topic(pool: &PgPool, topic_id: i64) -> Result<(), AppError> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM topics WHERE id = $1")
        .bind(topic_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Topic not found".to_string()))?;
    Ok(())
}

/// Creates a course.
/// Staff only.
pub async fn create_course(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let course = sqlx::query_as::<_, Course>(
        r#"
        INSERT INTO courses (code, title, description, faculty_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, code, title, description, faculty_id
        "#,
    )
    .bind(payload.code.trim().to_ascii_uppercase())
    .bind(clean_html(&payload.title))
    .bind(clean_optional(payload.description.as_deref()))
    .bind(payload.faculty_id)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict(format!("Course code '{}' already exists", payload.code))
        } else {
            tracing::error!("Failed to create course: {:?}", e);
            AppError::InternalServerError(e.to_string())
        }
    })?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// Adds a topic to a course.
/// Staff only.
pub async fn create_topic(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateTopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    sqlx::query_scalar::<_, i64>("SELECT id FROM courses WHERE id = $1")
        .bind(payload.course_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Course not found".to_string()))?;

    let topic = sqlx::query_as::<_, Topic>(
        "INSERT INTO topics (course_id, name) VALUES ($1, $2) RETURNING id, course_id, name",
    )
    .bind(payload.course_id)
    .bind(clean_html(&payload.name))
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(topic)))
}

/// Creates a question under a topic.
/// Staff only.
pub async fn create_question(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    ensure_topic(&pool, payload.topic_id).await?;

    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions
            (topic_id, content, option_a, option_b, option_c, option_d, correct_option, difficulty)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, topic_id, content, option_a, option_b, option_c, option_d,
                  correct_option, difficulty
        "#,
    )
    .bind(payload.topic_id)
    .bind(clean_html(&payload.content))
    .bind(clean_html(&payload.option_a))
    .bind(clean_html(&payload.option_b))
    .bind(clean_html(&payload.option_c))
    .bind(clean_html(&payload.option_d))
    .bind(payload.correct_option.to_ascii_uppercase())
    .bind(payload.difficulty.to_ascii_uppercase())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(question)))
}

/// Deletes a question.
/// Staff only. Past assessments keep their scores.
pub async fn delete_question(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Attaches remediation content to a topic.
/// Staff only.
pub async fn create_recommendation(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateRecommendationRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    ensure_topic(&pool, payload.topic_id).await?;

    let recommendation = sqlx::query_as::<_, Recommendation>(
        r#"
        INSERT INTO recommendations (topic_id, url, description, media_type)
        VALUES ($1, $2, $3, $4)
        RETURNING id, topic_id, url, description, media_type
        "#,
    )
    .bind(payload.topic_id)
    .bind(payload.url.trim())
    .bind(clean_html(&payload.description))
    .bind(payload.media_type.as_str())
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(recommendation)))
}

/// Assigns a topic to a group of students.
/// Staff only. Either every student gets the assignment or none does.
pub async fn assign_topic(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateAssignmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let faculty_id = claims.user_id()?;

    let mut tx = pool.begin().await?;

    sqlx::query_scalar::<_, i64>("SELECT id FROM topics WHERE id = $1")
        .bind(payload.topic_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound("Topic not found".to_string()))?;

    let mut assignments = Vec::with_capacity(payload.student_ids.len());
    for student_id in &payload.student_ids {
        sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = $1")
            .bind(*student_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student not found: {}", student_id)))?;

        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (topic_id, student_id, assigned_by)
            VALUES ($1, $2, $3)
            RETURNING id, topic_id, student_id, assigned_by, assigned_at, status
            "#,
        )
        .bind(payload.topic_id)
        .bind(*student_id)
        .bind(faculty_id)
        .fetch_one(&mut *tx)
        .await?;
        assignments.push(assignment);
    }

    tx.commit().await?;

    tracing::info!(
        topic_id = payload.topic_id,
        count = assignments.len(),
        "Topic assigned"
    );

    Ok((StatusCode::CREATED, Json(assignments)))
}
