use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::KisanConfig;
use crate::forecast_service::ForecastService;
use crate::snapshot::FileSnapshotSink;
use crate::weather::OpenWeatherClient;

/// Routes and middleware around a forecast service
pub fn app(service: Arc<ForecastService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::status))
        .nest("/api", api::router(service))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(config: KisanConfig) -> Result<()> {
    let timezone = config.locale.tz()?;
    let provider = OpenWeatherClient::new(&config.weather)?;
    let sink = FileSnapshotSink::new(config.snapshot.path.clone());
    let service = Arc::new(ForecastService::new(
        Arc::new(provider),
        Arc::new(sink),
        timezone,
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "Web server failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
