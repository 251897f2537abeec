//! Coordinate model and location labelling

use crate::labels;

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Karachi, the reference point used when the caller gives no coordinate
    pub const DEFAULT: Coordinate = Coordinate {
        latitude: 24.8607,
        longitude: 67.0011,
    };

    /// Create a new coordinate
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether this is exactly the default coordinate pair.
    ///
    /// Exact float equality, not a distance threshold: a point a few metres
    /// away is a "selected location".
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_default(&self) -> bool {
        self.latitude == Self::DEFAULT.latitude && self.longitude == Self::DEFAULT.longitude
    }

    /// Human-readable label for the response
    #[must_use]
    pub fn location_label(&self) -> &'static str {
        if self.is_default() {
            labels::DEFAULT_CITY
        } else {
            labels::SELECTED_LOCATION
        }
    }

    /// Format coordinate as a short string for logs
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::DEFAULT
    }
}
