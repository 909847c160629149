// src/handlers/user.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::user::{ROLE_FACULTY, ROLE_STUDENT, USER_COLUMNS, User},
};

async fn users_with_role(pool: &PgPool, role: &str) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY full_name, id"
    ))
    .bind(role)
    .fetch_all(pool)
    .await?;
    Ok(users)
}

/// Lists every account. Staff only.
pub async fn list_users(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let users = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
        .fetch_all(&pool)
        .await?;

    Ok(Json(users))
}

/// Lists student accounts, e.g. to pick who gets an assignment. Staff only.
pub async fn list_students(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(users_with_role(&pool, ROLE_STUDENT).await?))
}

/// Lists faculty accounts. Staff only.
pub async fn list_faculty(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(users_with_role(&pool, ROLE_FACULTY).await?))
}

/// Fetches one account. Staff only.
pub async fn get_user(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}
