use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tracing::{debug, info};

/// Connects and brings the schema up to date, reporting what was applied.
pub async fn init_database(database_url: &str) -> Result<()> {
    info!("Initializing database");
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url)
        .await
        .with_context(|| format!("failed to connect to database '{}'", database_url))?;

    let pending = Migrator::get_pending_migrations(&db)
        .await
        .context("failed to inspect migration status")?;
    if pending.is_empty() {
        info!("Schema already up to date");
        return Ok(());
    }

    info!("Applying {} pending migration(s)", pending.len());
    Migrator::up(&db, None)
        .await
        .context("failed to run database migrations")?;

    info!("Database initialization completed successfully!");
    Ok(())
}
