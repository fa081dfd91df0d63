use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use members_query::{
    app,
    config::Config,
    schema,
    setup::{self, SetupResult},
    state::AppShared,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let SetupResult { db } = setup::setup_all(&config).await?;
    let state = AppShared::new(db, schema::schema());
    let app = app::router(state);

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;
    info!("Server running at http://{}", config.bind_address);
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
