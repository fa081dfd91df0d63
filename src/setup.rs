use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::Config;

pub struct SetupResult {
    pub db: DatabaseConnection,
}

pub async fn setup_all(config: &Config) -> anyhow::Result<SetupResult> {
    let db = setup_db(config).await?;
    Ok(SetupResult { db })
}

async fn setup_db(config: &Config) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .context("failed to connect to the database")?;
    db.ping().await.context("database did not answer ping")?;

    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}
