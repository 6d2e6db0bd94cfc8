use anyhow::{Context, Result};
use tellerform::{Config, Database};
use tellerform_server::{router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load_default()?.with_env(|key| std::env::var(key).ok())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    info!("tellerform-server starting");

    let database = Database::connect(&config.database)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database.url))?;
    info!(db_type = ?database.db_type(), "database ready");

    let app = router(AppState::new(database));

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
