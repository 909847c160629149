// src/main.rs

use std::time::Duration;

use knowledge_gap_backend::config::Config;
use knowledge_gap_backend::models::user::ROLE_ADMIN;
use knowledge_gap_backend::routes;
use knowledge_gap_backend::state::AppState;
use knowledge_gap_backend::utils::hash::hash_password;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const MAX_DB_RETRIES: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads .env (if present), then the environment
    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        mastery_threshold = config.mastery_threshold,
        "Configuration loaded"
    );

    let pool = connect_with_retry(&config.database_url).await?;
    tracing::info!("Database connected");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    if let Err(e) = seed_admin_user(&pool, &config).await {
        tracing::error!("Failed to seed admin user: {:?}", e);
    }

    let bind_addr = config.bind_addr.clone();
    let state = AppState { pool, config };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn connect_with_retry(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 0;
    loop {
        match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt < MAX_DB_RETRIES => {
                attempt += 1;
                tracing::warn!(
                    "Database not ready, retrying in 2s (attempt {}): {}",
                    attempt,
                    e
                );
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
            Err(e) => {
                tracing::error!("Giving up on database after {} retries", MAX_DB_RETRIES);
                return Err(e);
            }
        }
    }
}

/// Creates the bootstrap admin account from ADMIN_EMAIL / ADMIN_PASSWORD if it is missing.
async fn seed_admin_user(pool: &PgPool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        return Ok(());
    };
    let email = email.trim().to_lowercase();

    let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    if exists.is_none() {
        tracing::info!("Seeding admin user: {}", email);
        let hashed_password = hash_password(password)?;

        sqlx::query("INSERT INTO users (email, password, full_name, role) VALUES ($1, $2, $3, $4)")
            .bind(&email)
            .bind(hashed_password)
            .bind("Administrator")
            .bind(ROLE_ADMIN)
            .execute(pool)
            .await?;
        tracing::info!("Admin user created");
    }

    Ok(())
}
