// src/state.rs

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::{config::Config, engine::MasteryPolicy};

/// Shared handler state: the connection pool plus the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

/// Lets handlers extract `State<MasteryPolicy>` directly.
impl FromRef<AppState> for MasteryPolicy {
    fn from_ref(state: &AppState) -> Self {
        MasteryPolicy::new(state.config.mastery_threshold)
    }
}
