//! Kisan Dost - weather forecast and irrigation advisory API
//!
//! This library fetches a multi-day forecast for a coordinate, converts it to
//! local time with Urdu field names, attaches an irrigation recommendation to
//! every entry and persists the result as a JSON snapshot.

pub mod api;
pub mod config;
pub mod error;
pub mod forecast_service;
pub mod irrigation;
pub mod labels;
pub mod logging;
pub mod models;
pub mod normalizer;
pub mod schema;
pub mod snapshot;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::KisanConfig;
pub use error::{ApiFailure, KisanError};
pub use forecast_service::{FORECAST_DAYS, ForecastService};
pub use irrigation::{Advisory, Rationale, Recommendation};
pub use models::{Coordinate, ForecastEntry, ForecastResponse, RawForecastPoint};
pub use snapshot::{FileSnapshotSink, SnapshotSink};
pub use weather::{FetchOutcome, ForecastProvider, OpenWeatherClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, KisanError>;
