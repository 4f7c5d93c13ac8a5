//! Climate query service: date windows, filters and aggregates over the
//! measurement and station tables

use chrono::NaiveDate;
use climate_shared::{
    parse_iso_date, validate_date_param, DailySeries, DateWindow, PrecipitationResponse,
    StationsResponse, TemperatureSummary, TobsResponse,
};
use sqlx::{SqliteConnection, SqlitePool};

use crate::config::ClimateConfig;
use crate::error::{AppError, AppResult};

/// Read-only queries against the climate dataset.
///
/// Every operation checks out one pooled connection, runs its queries on it
/// and returns it to the pool when the connection guard drops, on success
/// and on error alike.
#[derive(Clone)]
pub struct ClimateService {
    db: SqlitePool,
    tobs_station: String,
    window_days: i64,
    strict_dates: bool,
}

impl ClimateService {
    /// Create a new ClimateService instance
    pub fn new(db: SqlitePool, config: &ClimateConfig) -> Self {
        Self {
            db,
            tobs_station: config.tobs_station.clone(),
            window_days: config.window_days,
            strict_dates: config.strict_dates,
        }
    }

    /// Station whose observations `tobs` returns
    pub fn tobs_station(&self) -> &str {
        &self.tobs_station
    }

    /// Most recent measurement date, `None` for an empty dataset
    pub async fn latest_date(&self) -> AppResult<Option<NaiveDate>> {
        let mut conn = self.db.acquire().await?;
        Self::latest_date_on(&mut conn).await
    }

    /// The trailing window ending at the most recent measurement date
    pub async fn past_year_window(&self) -> AppResult<DateWindow> {
        let mut conn = self.db.acquire().await?;
        self.past_year_window_on(&mut conn).await
    }

    /// Precipitation per date over the trailing window.
    ///
    /// Readings from different stations on the same date collapse onto one
    /// key; the last row returned wins.
    pub async fn precipitation(&self) -> AppResult<PrecipitationResponse> {
        let mut conn = self.db.acquire().await?;
        let window = self.past_year_window_on(&mut conn).await?;

        let rows = sqlx::query_as::<_, (String, Option<f64>)>(
            r#"
            SELECT date, prcp
            FROM measurement
            WHERE date >= ?1 AND date <= ?2
            "#,
        )
        .bind(window.start_key())
        .bind(window.end_key())
        .fetch_all(&mut *conn)
        .await?;

        tracing::debug!(
            "Fetched {} precipitation rows between {} and {}",
            rows.len(),
            window.start,
            window.end
        );

        let precipitation: DailySeries<Option<f64>> = rows.into_iter().collect();
        Ok(PrecipitationResponse { precipitation })
    }

    /// Distinct station names, in the order produced by grouping
    pub async fn stations(&self) -> AppResult<StationsResponse> {
        let mut conn = self.db.acquire().await?;

        let stations = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name
            FROM station
            GROUP BY name
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(StationsResponse { stations })
    }

    /// Temperature observations of the configured station over the trailing
    /// window
    pub async fn tobs(&self) -> AppResult<TobsResponse> {
        let mut conn = self.db.acquire().await?;
        let window = self.past_year_window_on(&mut conn).await?;

        let rows = sqlx::query_as::<_, (String, f64)>(
            r#"
            SELECT date, tobs
            FROM measurement
            WHERE date >= ?1 AND date <= ?2 AND station = ?3
            "#,
        )
        .bind(window.start_key())
        .bind(window.end_key())
        .bind(&self.tobs_station)
        .fetch_all(&mut *conn)
        .await?;

        tracing::debug!(
            "Fetched {} temperature observations for {} between {} and {}",
            rows.len(),
            self.tobs_station,
            window.start,
            window.end
        );

        Ok(TobsResponse {
            station: self.tobs_station.clone(),
            observations: rows.into_iter().collect(),
        })
    }

    /// MIN/AVG/MAX temperature across all stations from `start` onwards,
    /// bounded by `end` when given. Both bounds are inclusive.
    ///
    /// Unless strict date checking is enabled, the bounds are compared
    /// against stored dates as plain strings: a malformed bound matches
    /// nothing and yields an empty summary, as does `end < start`.
    pub async fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> AppResult<TemperatureSummary> {
        if self.strict_dates {
            Self::check_date_param("start", start)?;
            if let Some(end) = end {
                Self::check_date_param("end", end)?;
            }
        }

        let mut conn = self.db.acquire().await?;

        let (min, avg, max) = sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(
            r#"
            SELECT CAST(MIN(tobs) AS REAL), CAST(AVG(tobs) AS REAL), CAST(MAX(tobs) AS REAL)
            FROM measurement
            WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&mut *conn)
        .await?;

        let summary = TemperatureSummary::new(min, avg, max);
        if summary.is_empty() {
            tracing::debug!("No temperature observations from {} to {:?}", start, end);
        }

        Ok(summary)
    }

    async fn latest_date_on(conn: &mut SqliteConnection) -> AppResult<Option<NaiveDate>> {
        let max_date = sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&mut *conn)
            .await?;

        match max_date {
            Some(raw) => parse_iso_date(&raw)
                .map(Some)
                .map_err(|_| AppError::InvalidStoredDate(raw)),
            None => Ok(None),
        }
    }

    async fn past_year_window_on(&self, conn: &mut SqliteConnection) -> AppResult<DateWindow> {
        let latest = Self::latest_date_on(conn).await?.ok_or(AppError::NoData)?;

        DateWindow::trailing(latest, self.window_days).ok_or_else(|| {
            AppError::Internal(format!(
                "A {}-day window before {} is out of range",
                self.window_days, latest
            ))
        })
    }

    fn check_date_param(field: &str, value: &str) -> AppResult<()> {
        validate_date_param(value).map_err(|msg| AppError::Validation {
            field: field.to_string(),
            message: msg.to_string(),
        })
    }
}
