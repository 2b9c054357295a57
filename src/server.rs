use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{config::Config, dataset::Dataset, handlers};

/// Start the College Tuition Cost API server
///
/// The dataset is read and fully built before the listener is bound, so no
/// request can ever observe a partially loaded store. An unreadable dataset
/// file is fatal.
pub async fn start_server(config: Config) -> Result<()> {
    let text = tokio::fs::read_to_string(&config.data.file)
        .await
        .with_context(|| {
            format!(
                "Failed to read dataset file '{}'",
                config.data.file.display()
            )
        })?;

    let dataset = Arc::new(Dataset::from_text(&text));
    info!(
        "Loaded {} colleges from '{}'",
        dataset.len(),
        config.data.file.display()
    );

    let app = create_router(handlers::colleges::AppState { dataset });

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting College Tuition Cost API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Create the axum router with all routes and middleware
pub fn create_router(state: handlers::colleges::AppState) -> Router {
    Router::new()
        .route("/colleges", get(handlers::colleges::list_colleges))
        .route("/college", get(handlers::colleges::college_cost))
        .route(
            "/college/room-and-board",
            get(handlers::colleges::room_and_board_cost),
        )
        .fallback(handlers::colleges::unknown_route)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received, draining connections...");
}
