//! Forecast assembly
//!
//! Runs the whole pipeline for one request: fetch, fall back if needed,
//! normalize, attach irrigation advice, persist the snapshot and hand back
//! the response.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{error, info, instrument, warn};

use crate::irrigation;
use crate::models::{Coordinate, ForecastEntry, ForecastResponse};
use crate::normalizer;
use crate::snapshot::SnapshotSink;
use crate::weather::{FetchOutcome, ForecastProvider, fallback};

/// Forecast horizon in days beyond today
pub const FORECAST_DAYS: u32 = 3;

/// Where the entries of a response came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastSource {
    Provider,
    Fallback,
}

/// Forecast pipeline shared by all requests
pub struct ForecastService {
    provider: Arc<dyn ForecastProvider>,
    sink: Arc<dyn SnapshotSink>,
    timezone: Tz,
}

impl ForecastService {
    pub fn new(
        provider: Arc<dyn ForecastProvider>,
        sink: Arc<dyn SnapshotSink>,
        timezone: Tz,
    ) -> Self {
        Self {
            provider,
            sink,
            timezone,
        }
    }

    /// Build the advisory forecast for a coordinate.
    ///
    /// Never fails: an unavailable provider yields the synthetic forecast and
    /// snapshot write failures are logged and ignored.
    #[instrument(skip(self), fields(lat = coordinate.latitude, lon = coordinate.longitude))]
    pub async fn get_forecast(&self, coordinate: Coordinate) -> ForecastResponse {
        let (mut entries, source) = self.collect_entries(coordinate).await;

        for entry in &mut entries {
            entry.advisory = Some(irrigation::advise(entry));
        }

        let response = ForecastResponse {
            success: true,
            city: coordinate.location_label().to_string(),
            coordinate,
            forecast_days: FORECAST_DAYS,
            entries,
            generated_at: self.now().naive_local(),
        };

        if let Err(e) = self.sink.write(&response).await {
            error!("Failed to persist forecast snapshot: {}", e);
        }

        info!(
            "Served {} entries for {} ({:?})",
            response.entries.len(),
            coordinate.format_coordinates(),
            source
        );

        response
    }

    async fn collect_entries(
        &self,
        coordinate: Coordinate,
    ) -> (Vec<ForecastEntry>, ForecastSource) {
        match self.provider.fetch(coordinate).await {
            FetchOutcome::Success(points) => {
                let now = self.now();
                let entries = normalizer::normalize(&points, FORECAST_DAYS, now);
                if entries.is_empty() {
                    warn!(
                        "Provider returned {} points but none within {} days, using fallback",
                        points.len(),
                        FORECAST_DAYS
                    );
                    (fallback::generate(now), ForecastSource::Fallback)
                } else {
                    (entries, ForecastSource::Provider)
                }
            }
            FetchOutcome::Unavailable => {
                warn!("Weather provider unavailable, using fallback forecast");
                (fallback::generate(self.now()), ForecastSource::Fallback)
            }
        }
    }

    /// Current time in the service's time zone, read fresh on every call
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }
}
