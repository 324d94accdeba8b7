use std::sync::Arc;

use api_rest::{router, AppState};
use sluglabs_core::{
    CoreConfig, InMemorySubmissionStore, MongoPositionStore, PositionService, SubmissionService,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the SlugLabs service
///
/// Serves the REST API on port 3000 (configurable via SLUGLABS_REST_ADDR). Positions are read
/// from the configured MongoDB collection; submissions come from the in-memory sample store.
///
/// # Environment Variables
/// - `SLUGLABS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `MONGODB_URI`: document store connection string (required)
/// - `MONGODB_DB`: database name (default: "test")
/// - `POSITIONS_COLLECTION`: position collection (default: "real_opportunities")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is incomplete or the MongoDB URI is malformed,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sluglabs=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("SLUGLABS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = CoreConfig::from_env_values(
        std::env::var("MONGODB_URI").ok(),
        std::env::var("MONGODB_DB").ok(),
        std::env::var("POSITIONS_COLLECTION").ok(),
    )?;

    let position_store = MongoPositionStore::connect(&cfg).await?;
    let state = AppState::new(
        PositionService::new(Arc::new(position_store)),
        SubmissionService::new(Arc::new(InMemorySubmissionStore::seeded())),
    );

    tracing::info!("++ Starting SlugLabs REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- SlugLabs REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("received Ctrl+C, shutting down");
}
