// src/handlers/assessment.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    engine::{GapEngine, MasteryPolicy},
    error::AppError,
    models::assessment::{Assessment, SubmitAssessmentRequest},
    repository::PgRepository,
    utils::jwt::Claims,
};

fn engine(pool: PgPool, policy: MasteryPolicy) -> GapEngine<PgRepository, PgRepository> {
    let repository = PgRepository::new(pool);
    GapEngine::new(repository.clone(), repository, policy)
}

/// Submits a quiz attempt and returns the score, topic breakdown, new gaps and recommendations.
///
/// * Students may only submit for themselves; faculty and admins may submit for anyone.
/// * Every accepted submission adds an assessment row; weak topics add gap rows.
pub async fn submit_assessment(
    State(pool): State<PgPool>,
    State(policy): State<MasteryPolicy>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    claims.ensure_can_act_for(req.student_id)?;

    let result = engine(pool, policy)
        .evaluate(req.student_id, req.course_id, &req.answers)
        .await?;

    Ok(Json(result))
}

/// Lists every knowledge gap recorded for a student, oldest first.
pub async fn list_student_gaps(
    State(pool): State<PgPool>,
    State(policy): State<MasteryPolicy>,
    Extension(claims): Extension<Claims>,
    Path(student_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    claims.ensure_can_act_for(student_id)?;

    let gaps = engine(pool, policy).list_gaps(student_id).await?;

    Ok(Json(gaps))
}

/// Lists a student's past assessments, newest first.
pub async fn list_student_assessments(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(student_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    claims.ensure_can_act_for(student_id)?;

    let assessments = sqlx::query_as::<_, Assessment>(
        r#"
        SELECT id, student_id, course_id, score, submitted_at
        FROM assessments
        WHERE student_id = $1
        ORDER BY submitted_at DESC, id DESC
        "#,
    )
    .bind(student_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch assessment history: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(assessments))
}
