//! Persistence layer: connection pool, schema management, seed data, and
//! repositories.

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Every table owned by the embedded migrations, children first, plus the
/// migration ledger itself so the migrations re-apply from scratch.
pub const MANAGED_TABLES: [&str; 4] = ["user_roles", "users", "roles", "_sqlx_migrations"];

/// Failure during the startup reset-and-seed step.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Schema migration failed: {0}")]
    Migrate(#[from] MigrateError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Drop every managed table and rebuild the schema from the migrations.
///
/// All existing data is lost.
pub async fn reset_schema(pool: &DbPool) -> Result<(), MigrateError> {
    let statement = format!("DROP TABLE IF EXISTS {} CASCADE", MANAGED_TABLES.join(", "));
    sqlx::query(&statement).execute(pool).await?;
    tracing::debug!(tables = ?MANAGED_TABLES, "Dropped managed tables");

    run_migrations(pool).await
}

/// Wipe the database, rebuild the schema, and insert the fixed roles.
///
/// Runs once at startup, before the listener is bound.
pub async fn sync_and_seed(pool: &DbPool) -> Result<Vec<models::role::Role>, BootstrapError> {
    reset_schema(pool).await?;
    tracing::info!("Dropped and re-synced database");

    let roles = seed::seed_roles(pool).await?;
    tracing::info!(count = roles.len(), "Seeded roles");
    Ok(roles)
}
