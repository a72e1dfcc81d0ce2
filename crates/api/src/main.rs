use anyhow::Context;

use roster_api::app::SharedStore;
use roster_api::config::ApiConfig;
use roster_infra::InMemoryEntityStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roster_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    // The store lives for the whole process; restart clears it.
    let store: SharedStore = InMemoryEntityStore::arc();
    let app = roster_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for ctrl-c ({e}); running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
