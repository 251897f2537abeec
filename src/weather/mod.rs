//! Weather data sources
//!
//! The live provider sits behind [`ForecastProvider`] so that the assembler
//! only ever sees a [`FetchOutcome`]; failures never travel further as
//! errors. When the outcome is [`FetchOutcome::Unavailable`], the
//! [`fallback`] module synthesizes a forecast instead.

use async_trait::async_trait;

use crate::models::{Coordinate, RawForecastPoint};

pub mod fallback;
pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Result of one forecast fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Provider answered with usable data
    Success(Vec<RawForecastPoint>),
    /// Network failure, timeout, bad status or malformed body
    Unavailable,
}

impl FetchOutcome {
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the multi-day forecast for a coordinate. Never retries.
    async fn fetch(&self, coordinate: Coordinate) -> FetchOutcome;
}
