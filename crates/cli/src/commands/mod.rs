//! CLI subcommands.

pub mod migrate;
pub mod seed;

use sqlx::PgPool;

/// Errors shared by all subcommands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connect to the database named by `FASHIONCAMP_DATABASE_URL`
/// (or `DATABASE_URL`), the same lookup the API server performs.
pub async fn connect() -> Result<PgPool, CliError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("FASHIONCAMP_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CliError::MissingEnvVar("FASHIONCAMP_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    Ok(PgPool::connect(&database_url).await?)
}
