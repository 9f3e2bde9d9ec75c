use anyhow::Context;
use roost_api::{app, AppState};
use roost_store::{Config, InMemoryStore, Seed};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roost_api=debug,roost_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;

    let seed = match &config.server.seed_file {
        Some(path) => Seed::from_file(path)
            .await
            .with_context(|| format!("Failed to load seed file {}", path))?,
        None => Seed::default(),
    };
    let store = Arc::new(InMemoryStore::new(seed));

    let app = app(AppState::in_memory(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Roost mock backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
