mod api;
mod config;
mod error;
mod schema;
mod store;

use crate::api::{
    create_lead, diagnostics, get_vehicle, list_vehicles, root, schema_index, submit_booking,
    upload_file, AppState,
};
use crate::config::Config;
use crate::store::StoreClient;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup log directory
    let log_dir =
        std::env::var("LOG_DIR").unwrap_or_else(|_| "/var/log/blacklabel-api".to_string());

    // Create log directory if it doesn't exist
    std::fs::create_dir_all(&log_dir).unwrap_or_else(|e| {
        eprintln!("Warning: Could not create log directory {}: {}", log_dir, e);
    });

    // Create file appender with daily rotation
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "blacklabel-api.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize logging - both stdout and file
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,blacklabel_api=debug")),
        )
        // Console output
        .with(fmt::layer().with_target(true))
        // File output with JSON format for easy parsing
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .json()
                .with_writer(non_blocking),
        )
        .init();

    debug!("Logging initialized - log directory: {}", log_dir);

    // Load environment from .env file if present
    if let Err(e) = dotenvy::dotenv() {
        warn!("No .env file found or error loading it: {}", e);
    }

    // Load configuration
    let config = Config::from_env()?;
    let socket_addr = config.socket_addr()?;

    info!("Starting Black Label Rentals API on {}", socket_addr);
    info!("Database name: {}", config.database_name);
    info!("Upload directory: {}", config.upload_dir.display());

    // Connect the document store and make sure every collection exists
    let store = Arc::new(StoreClient::connect(&config).await?);
    store.ensure_collections(&schema::collections()).await?;

    // Shared handler state
    let state = Arc::new(AppState::new(store, &config));

    // The marketing site is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics))
        .route("/api/vehicles", get(list_vehicles))
        .route("/api/vehicles/:slug", get(get_vehicle))
        .route("/api/lead", post(create_lead))
        .route("/api/bookings", post(submit_booking))
        .route("/api/upload", post(upload_file))
        .route("/schema", get(schema_index))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Create listener
    let listener = tokio::net::TcpListener::bind(&socket_addr).await?;
    info!("Server listening on {}", socket_addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}
