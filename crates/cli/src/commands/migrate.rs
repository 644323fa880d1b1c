//! Database migration command.
//!
//! Migrations are embedded from `crates/api/migrations/` at compile time,
//! so the binary can be shipped and run without the source tree.

use super::CliError;

/// Run all pending database migrations.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
