// src/handlers/assignment.rs

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::assignment::{
        Assignment, AssignmentListParams, CompleteTopicRequest, STATUS_COMPLETED, STATUS_PENDING,
    },
    utils::jwt::Claims,
};

/// Lists the caller's assignments, optionally filtered by status.
pub async fn list_my_assignments(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<AssignmentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = claims.user_id()?;
    let status = params.status_filter().map_err(AppError::BadRequest)?;

    let assignments = sqlx::query_as::<_, Assignment>(
        r#"
        SELECT id, topic_id, student_id, assigned_by, assigned_at, status
        FROM assignments
        WHERE student_id = $1
          AND ($2::TEXT IS NULL OR status = $2)
        ORDER BY assigned_at DESC, id DESC
        "#,
    )
    .bind(student_id)
    .bind(status)
    .fetch_all(&pool)
    .await?;

    Ok(Json(assignments))
}

/// Marks an assignment completed. Owner or staff only.
pub async fn complete_assignment(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let owner = sqlx::query_scalar::<_, i64>("SELECT student_id FROM assignments WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Assignment not found".to_string()))?;

    claims.ensure_can_act_for(owner)?;

    let assignment = sqlx::query_as::<_, Assignment>(
        r#"
        UPDATE assignments SET status = $1
        WHERE id = $2
        RETURNING id, topic_id, student_id, assigned_by, assigned_at, status
        "#,
    )
    .bind(STATUS_COMPLETED)
    .bind(id)
    .fetch_one(&pool)
    .await?;

    Ok(Json(assignment))
}

/// Completes every pending assignment the student has on a topic.
/// Owner or staff only. Returns the updated assignments; none pending is not an error.
pub async fn complete_topic_assignments(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CompleteTopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    claims.ensure_can_act_for(req.student_id)?;

    let assignments = sqlx::query_as::<_, Assignment>(
        r#"
        UPDATE assignments SET status = $1
        WHERE student_id = $2 AND topic_id = $3 AND status = $4
        RETURNING id, topic_id, student_id, assigned_by, assigned_at, status
        "#,
    )
    .bind(STATUS_COMPLETED)
    .bind(req.student_id)
    .bind(req.topic_id)
    .bind(STATUS_PENDING)
    .fetch_all(&pool)
    .await?;

    tracing::info!(
        student_id = req.student_id,
        topic_id = req.topic_id,
        count = assignments.len(),
        "Topic assignments completed"
    );

    Ok(Json(assignments))
}
