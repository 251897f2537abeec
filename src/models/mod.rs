//! Data models for the Kisan Dost service
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and the location label
//! - Forecast: Provider records, normalized entries and the response aggregate

pub mod forecast;
pub mod location;

// Re-export all public types for convenient access
pub use forecast::{ForecastEntry, ForecastResponse, RawForecastPoint};
pub use location::Coordinate;
