use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use model_registry_service::{AppConfig, LISTEN_ADDR, MetadataStore, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(host = %config.db_host, database = %config.db_name, "configured metadata store");

    let store = Arc::new(MetadataStore::connect(&config));
    let router = build_router(store);

    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "model registry ready, accepting registrations");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,hyper=warn,axum::rejection=trace".into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
