//! Forecast normalization
//!
//! Turns provider records (UTC timestamps, raw units) into local-time entries
//! limited to the forecast horizon.

use chrono::{DateTime, Days, NaiveTime, Timelike};
use chrono_tz::Tz;
use tracing::debug;

use crate::models::{ForecastEntry, RawForecastPoint};

/// Normalize raw provider points relative to `now`.
///
/// `now` must already be in the target time zone; "today" is taken from it
/// on every call. A point is kept only if its local date lies within
/// `[today, today + horizon_days]`. Source order is preserved.
#[must_use]
pub fn normalize(
    points: &[RawForecastPoint],
    horizon_days: u32,
    now: DateTime<Tz>,
) -> Vec<ForecastEntry> {
    let tz = now.timezone();
    let today = now.date_naive();
    let max_date = today
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(today);

    points
        .iter()
        .filter_map(|point| {
            let Some(utc) = DateTime::from_timestamp(point.timestamp, 0) else {
                debug!("Skipping point with invalid timestamp {}", point.timestamp);
                return None;
            };
            let local = utc.with_timezone(&tz);
            let date = local.date_naive();

            if date < today || date > max_date {
                return None;
            }

            Some(ForecastEntry {
                date,
                time: NaiveTime::from_hms_opt(local.hour(), local.minute(), 0)
                    .unwrap_or(NaiveTime::MIN),
                temperature: round_one_decimal(point.temperature),
                humidity: point.humidity.min(100),
                rain_probability: probability_to_percent(point.precipitation_probability),
                wind_speed: round_one_decimal(point.wind_speed),
                description: title_case(&point.description),
                advisory: None,
            })
        })
        .collect()
}

/// Round to one decimal place, halves away from zero
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a 0.0-1.0 probability to a whole percentage.
///
/// Out-of-range input is clamped; halves round away from zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn probability_to_percent(fraction: f64) -> u8 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Capitalize the first letter of every word and lowercase the rest.
///
/// A word starts after any non-alphabetic character, so "broken-clouds"
/// becomes "Broken-Clouds".
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}
