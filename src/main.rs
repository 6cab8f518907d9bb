//! Garaged server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use garaged::api::{create_router, AppState};
use garaged::config::{AppConfig, LogFormat};
use garaged::relay::LogRelay;
use garaged::storage::create_storage;
use garaged::store::DoorStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    if config.auth.secret.is_empty() {
        tracing::warn!("auth.secret is empty; command endpoints accept empty-body requests");
    }

    let storage_backend = create_storage(config.storage_config())
        .context("failed to open storage backend")?;
    let storage: Arc<dyn garaged::storage::StorageBackend> = Arc::from(storage_backend);

    let store = Arc::new(DoorStore::new(storage, config.storage.state_file.clone()));

    // First-boot repair: create the backing file with the default state.
    // Logs its outcome and never aborts the boot; a failed creation is
    // reported per request instead.
    store.initialize().await;

    let state = AppState::new(store, config.auth.secret.clone(), Arc::new(LogRelay));
    let router = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("garaged=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
