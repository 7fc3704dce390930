use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod audit;
pub mod config;
pub mod context;
pub mod error;
pub mod feedback;
pub mod gateway;
pub mod metrics;
pub mod routes;
pub mod session;
pub mod store;

use audit::AuditTrail;
use config::Config;
use context::AppContext;
use feedback::MemoryFeedbackSink;
use session::HttpSessionProvider;
use store::HttpStore;

pub use routes::create_router;

pub async fn run() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env()?);
    tracing::info!(store = %config.store_base_url, "Configured backend store");

    // Wire up collaborators
    let store = Arc::new(HttpStore::new(&config.store_base_url, config.store_timeout_secs));
    let sessions = Arc::new(HttpSessionProvider::new(
        &config.session_url,
        config.session_timeout_secs,
    ));
    let feedback = Arc::new(MemoryFeedbackSink::default());
    let audit = Arc::new(AuditTrail::new(config.audit_capacity));

    // Create application context
    let app_context = Arc::new(AppContext::new(
        store,
        sessions,
        feedback,
        audit,
        config.clone(),
    ));

    let app = routes::create_router(app_context);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Crowdpitch gateway listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received. Shutting down...");
}
