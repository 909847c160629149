// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{CreateUserRequest, LoginRequest, ROLE_STUDENT, USER_COLUMNS, User},
    utils::{
        hash::{hash_password, verify_password},
        jwt::sign_jwt,
    },
};

/// Registers a new student account.
///
/// Hashes the password using Argon2 before storing it.
/// Returns 201 Created and the user object (excluding password).
pub async fn register(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let email = payload.email.trim().to_ascii_lowercase();
    let hashed_password = hash_password(&payload.password)?;

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (email, password, full_name, roll_number, role)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&email)
    .bind(hashed_password)
    .bind(payload.full_name.trim())
    .bind(payload.roll_number.as_deref())
    .bind(ROLE_STUDENT)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        // Postgres error code for unique violation is 23505
        if e.to_string().contains("unique constraint") || e.to_string().contains("23505") {
            AppError::Conflict(format!("Account '{}' already exists", email))
        } else {
            tracing::error!("Failed to register user: {:?}", e);
            AppError::from(e)
        }
    })?;

    tracing::info!(user_id = user.id, "Student registered");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticates a user and returns a JWT token.
///
/// Verifies the e-mail and password against the database.
/// If valid, signs a JWT token with the user's ID and role.
pub async fn login(
    State(pool): State<PgPool>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(payload.email.trim().to_ascii_lowercase())
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Login DB error: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    // Same message for unknown e-mail and wrong password
    let user = user.ok_or(AppError::AuthError("Invalid credentials".to_string()))?;

    if !verify_password(&payload.password, &user.password)? {
        return Err(AppError::AuthError("Invalid credentials".to_string()));
    }

    let token = sign_jwt(user.id, &user.role, &config.jwt_secret, config.jwt_expiration)?;

    Ok(Json(json!({
        "token": token,
        "type": "Bearer",
        "user": user,
    })))
}
