//! HTTP handlers for climate query endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use climate_shared::{PrecipitationResponse, StationsResponse, TemperatureSummary, TobsResponse};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::ClimateService;
use crate::AppState;

fn climate_service(state: AppState) -> ClimateService {
    ClimateService::new(state.db, &state.config.climate)
}

/// Precipitation for the year before the latest measurement
pub async fn get_precipitation(
    State(state): State<AppState>,
) -> AppResult<Json<PrecipitationResponse>> {
    let precipitation = climate_service(state).precipitation().await?;
    Ok(Json(precipitation))
}

/// Distinct station names
pub async fn get_stations(State(state): State<AppState>) -> AppResult<Json<StationsResponse>> {
    let stations = climate_service(state).stations().await?;
    Ok(Json(stations))
}

/// Temperature observations of the configured station for the year before
/// the latest measurement
pub async fn get_tobs(State(state): State<AppState>) -> AppResult<Json<TobsResponse>> {
    let tobs = climate_service(state).tobs().await?;
    Ok(Json(tobs))
}

/// Path parameters for temperature summaries; `end` is absent on the
/// open-ended route
#[derive(Debug, Deserialize)]
pub struct TemperatureRangePath {
    pub start: String,
    pub end: Option<String>,
}

/// MIN/AVG/MAX temperature from `start`, optionally up to `end`
pub async fn get_temperature_summary(
    State(state): State<AppState>,
    Path(range): Path<TemperatureRangePath>,
) -> AppResult<Json<TemperatureSummary>> {
    let summary = climate_service(state)
        .temperature_summary(&range.start, range.end.as_deref())
        .await?;
    Ok(Json(summary))
}
