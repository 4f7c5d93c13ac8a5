//! Shared fixtures for the integration tests: an in-memory SQLite store
//! seeded with the dataset layout

#![allow(dead_code)]

use climate_api::{config::ClimateConfig, create_app, AppState, Config};
use climate_shared::{Measurement, Station};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// One connection that never expires, so the in-memory database lives as
/// long as the pool
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        r#"
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        r#"
        CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

pub async fn seeded_pool(measurements: &[Measurement], stations: &[Station]) -> SqlitePool {
    let pool = memory_pool().await;

    for m in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(&m.station)
            .bind(&m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    for s in stations {
        sqlx::query("INSERT INTO station (station, name) VALUES (?1, ?2)")
            .bind(&s.station)
            .bind(&s.name)
            .execute(&pool)
            .await
            .unwrap();
    }

    pool
}

pub fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement::new(station, date, prcp, tobs)
}

pub fn station(code: &str, name: &str) -> Station {
    Station {
        station: code.to_string(),
        name: name.to_string(),
    }
}

pub fn app(pool: SqlitePool) -> axum::Router {
    app_with_climate(pool, ClimateConfig::default())
}

pub fn app_with_climate(pool: SqlitePool, climate: ClimateConfig) -> axum::Router {
    let mut config = Config::with_database_url("sqlite::memory:");
    config.climate = climate;
    create_app(AppState::new(pool, config))
}

/// A small slice of the Hawaii dataset around its last recorded day
pub fn hawaii_sample() -> (Vec<Measurement>, Vec<Station>) {
    let measurements = vec![
        measurement("USC00519397", "2016-08-22", Some(0.4), 78.0),
        measurement("USC00519397", "2016-08-23", Some(0.0), 81.0),
        measurement("USC00519281", "2016-08-22", Some(1.2), 76.0),
        measurement("USC00519281", "2016-08-23", Some(1.79), 77.0),
        measurement("USC00519281", "2017-08-17", None, 76.0),
        measurement("USC00519281", "2017-08-18", Some(0.06), 79.0),
        measurement("USC00516128", "2017-08-20", None, 79.0),
        measurement("USC00519397", "2017-08-23", Some(0.0), 81.0),
        measurement("USC00516128", "2017-08-23", Some(0.45), 76.0),
    ];

    let stations = vec![
        station("USC00519397", "WAIKIKI 717.2, HI US"),
        station("USC00519281", "WAIHEE 837.5, HI US"),
        station("USC00516128", "MANOA LYON ARBO 785.2, HI US"),
    ];

    (measurements, stations)
}
