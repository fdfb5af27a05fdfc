use anyhow::Context;

use finapi_api::config::ApiConfig;
use finapi_ledger::LedgerService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    finapi_observability::init(config.log_format);

    let app = finapi_api::app::build_app(LedgerService::new());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install ctrl-c handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
