//! Route definitions for the Hawaii Climate API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/precipitation", get(handlers::get_precipitation))
        .route("/stations", get(handlers::get_stations))
        .route("/tobs", get(handlers::get_tobs))
        .nest("/temp", temperature_routes())
}

/// Temperature summary routes, open-ended and bounded
fn temperature_routes() -> Router<AppState> {
    Router::new()
        .route("/:start", get(handlers::get_temperature_summary))
        .route("/:start/:end", get(handlers::get_temperature_summary))
}
