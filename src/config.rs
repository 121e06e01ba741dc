use anyhow::Result;
use moka::future::Cache;
use sea_orm::Database;
use std::time::Duration;
use tracing::info;

use crate::schemas::AppState;

/// Initialize application state for a given database URL.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    dotenvy::dotenv().ok();

    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    // Resolved rolls are cached briefly; a reference date that comes from a
    // closed period does not change between requests.
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    Ok(AppState { db, cache })
}
