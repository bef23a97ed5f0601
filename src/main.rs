use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;
use prism::logging::{init_tracing, shutdown_tracer};
use prism::metrics::{init_metrics, metrics_app};
use prism::router::init_router;
use prism::state::init_app_state;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize file logging: {e:#}");
    }

    let state = init_app_state().context("invalid backend configuration")?;
    let addr = state.dashboard_config.server_addr.clone();
    info!(backend = %state.backend.base_url(), "Using review API");

    let mut app = init_router(state);
    match init_metrics() {
        Some(handle) => app = app.merge(metrics_app(handle)),
        None => warn!("Metrics disabled"),
    }

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Dashboard running on http://{addr}");
    info!("Swagger UI available at http://{addr}/swagger-ui");
    info!("Scalar UI available at http://{addr}/scalar");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
