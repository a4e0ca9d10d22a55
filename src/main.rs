use anyhow::Context;
use tracing_subscriber::EnvFilter;

use watchboard::{
    api::{create_router, AppState},
    config::Config,
    store::Dataset,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let dataset = Dataset::load(&config.data_file)
        .with_context(|| format!("Failed to load dataset from {}", config.data_file))?;
    if !std::path::Path::new(&config.logo_path).is_file() {
        tracing::warn!(path = %config.logo_path, "Logo file not found");
    }

    let state = AppState::new(dataset, &config);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, summary_mode = ?config.summary_mode, "Dashboard listening");
    axum::serve(listener, app).await?;

    Ok(())
}
