//! OpenWeatherMap 5 day / 3 hour forecast client

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::{FetchOutcome, ForecastProvider};
use crate::config::WeatherConfig;
use crate::error::{ApiFailure, KisanError};
use crate::models::{Coordinate, RawForecastPoint};

const USER_AGENT: &str = concat!("KisanDost/", env!("CARGO_PKG_VERSION"));

/// Forecast client for the OpenWeatherMap API
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    /// HTTP client with the bounded request timeout
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    /// Create a new client from weather configuration.
    ///
    /// Fails if no API key is configured.
    pub fn new(config: &WeatherConfig) -> Result<Self, KisanError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| KisanError::config("API_KEY not found"))?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| KisanError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Single request to the forecast endpoint, with failures classified
    async fn fetch_points(
        &self,
        coordinate: Coordinate,
    ) -> Result<Vec<RawForecastPoint>, KisanError> {
        let url = format!(
            "{}/data/2.5/forecast?lat={}&lon={}&appid={}&units=metric",
            self.base_url, coordinate.latitude, coordinate.longitude, self.api_key
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(KisanError::from_transport)?;

        let status = response.status();
        debug!("Forecast response status: {}", status);
        if !status.is_success() {
            return Err(KisanError::api(
                ApiFailure::Status(status.as_u16()),
                format!(
                    "Forecast request failed with status: {} - {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown error")
                ),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(KisanError::from_transport)?;

        let parsed: OwForecastResponse = serde_json::from_str(&body).map_err(|e| {
            KisanError::api(
                ApiFailure::Parse,
                format!("Failed to parse OpenWeatherMap forecast JSON: {e}"),
            )
        })?;

        parsed.list.into_iter().map(RawForecastPoint::try_from).collect()
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherClient {
    #[instrument(skip(self), fields(lat = coordinate.latitude, lon = coordinate.longitude))]
    async fn fetch(&self, coordinate: Coordinate) -> FetchOutcome {
        let start_time = Instant::now();

        match self.fetch_points(coordinate).await {
            Ok(points) => {
                info!(
                    "Retrieved {} forecast points in {:.3}s",
                    points.len(),
                    start_time.elapsed().as_secs_f64()
                );
                FetchOutcome::Success(points)
            }
            Err(e) => {
                warn!(
                    "Forecast provider unavailable after {:.3}s: {}",
                    start_time.elapsed().as_secs_f64(),
                    e
                );
                FetchOutcome::Unavailable
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    /// Probability of precipitation; absent means no rain expected
    #[serde(default)]
    pop: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    #[serde(default)]
    list: Vec<OwForecastEntry>,
}

impl TryFrom<OwForecastEntry> for RawForecastPoint {
    type Error = KisanError;

    fn try_from(entry: OwForecastEntry) -> Result<Self, Self::Error> {
        let description = entry
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| {
                KisanError::api(
                    ApiFailure::Parse,
                    format!("Forecast entry at {} has no weather description", entry.dt),
                )
            })?;

        Ok(RawForecastPoint {
            timestamp: entry.dt,
            temperature: entry.main.temp,
            humidity: entry.main.humidity,
            precipitation_probability: entry.pop,
            wind_speed: entry.wind.speed,
            description,
        })
    }
}
