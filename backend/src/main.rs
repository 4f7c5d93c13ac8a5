//! Hawaii Climate API - Server
//!
//! Serves precipitation, station and temperature queries over a read-only
//! SQLite climate dataset.

use std::net::SocketAddr;

use climate_api::{create_app, db, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "climate_api=debug,tower_http=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Hawaii Climate API");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        "Temperature observations served for station {}",
        config.climate.tobs_station
    );

    // Create database connection pool
    tracing::info!("Opening climate store {}", config.database.url);
    let db_pool = db::connect(&config.database).await?;
    tracing::info!("Climate store opened read-only");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::new(db_pool, config);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
