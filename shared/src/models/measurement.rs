//! Station and measurement records as stored in the climate dataset

use serde::{Deserialize, Serialize};

/// One station's reading for a given date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    pub station: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`)
    pub date: String,
    /// Precipitation, absent for some readings
    pub prcp: Option<f64>,
    /// Temperature observation
    pub tobs: f64,
}

impl Measurement {
    pub fn new(station: impl Into<String>, date: impl Into<String>, prcp: Option<f64>, tobs: f64) -> Self {
        Self {
            station: station.into(),
            date: date.into(),
            prcp,
            tobs,
        }
    }
}

/// A weather-observation site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    /// Station code, e.g. `USC00519281`
    pub station: String,
    pub name: String,
}
