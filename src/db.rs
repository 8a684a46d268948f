//! Database pool bootstrap

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::config::DatabaseConfig;

/// Connect to PostgreSQL, retrying while the server comes up.
pub async fn connect_with_retry(config: &DatabaseConfig) -> Result<Pool<Postgres>, sqlx::Error> {
    let attempts = config.connect_retries.max(1);
    let interval = Duration::from_secs(config.retry_interval_secs);

    let mut attempt = 1;
    loop {
        let result = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.url)
            .await;

        match result {
            Ok(pool) => {
                tracing::info!("Connected to database (attempt {}/{})", attempt, attempts);
                return Ok(pool);
            }
            Err(e) if attempt < attempts => {
                tracing::warn!(
                    "Attempt {}/{}: unable to connect to PostgreSQL: {}",
                    attempt,
                    attempts,
                    e
                );
                tokio::time::sleep(interval).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!("Failed to connect to PostgreSQL after {} attempts", attempts);
                return Err(e);
            }
        }
    }
}

/// Apply the schema files under `migrations/`
pub async fn migrate(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}
