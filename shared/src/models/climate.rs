//! Query result shapes returned by the climate endpoints

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Date string to value, ordered by date
pub type DailySeries<T> = BTreeMap<String, T>;

/// `{ "precipitation": { date: value, ... } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrecipitationResponse {
    pub precipitation: DailySeries<Option<f64>>,
}

/// `{ "stations": [name, ...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationsResponse {
    pub stations: Vec<String>,
}

/// Temperature observations for a single station, serialized under the
/// station id: `{ "USC00519281": { date: value, ... } }`
#[derive(Debug, Clone, PartialEq)]
pub struct TobsResponse {
    pub station: String,
    pub observations: DailySeries<f64>,
}

impl Serialize for TobsResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.station, &self.observations)?;
        map.end()
    }
}

/// MIN/AVG/MAX of temperature observations over a date range.
///
/// All three fields are `None` when no measurement matched, which serializes
/// as explicit JSON `null` rather than zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TemperatureSummary {
    pub temperature_min: Option<f64>,
    pub temperature_avg: Option<f64>,
    pub temperature_max: Option<f64>,
}

impl TemperatureSummary {
    pub fn new(min: Option<f64>, avg: Option<f64>, max: Option<f64>) -> Self {
        Self {
            temperature_min: min,
            temperature_avg: avg,
            temperature_max: max,
        }
    }

    /// True when no measurement contributed to the aggregate
    pub fn is_empty(&self) -> bool {
        self.temperature_min.is_none()
            && self.temperature_avg.is_none()
            && self.temperature_max.is_none()
    }
}
