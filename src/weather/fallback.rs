//! Synthetic forecast used when the provider is unavailable

use chrono::{DateTime, Days, NaiveTime};
use chrono_tz::Tz;

use crate::labels;
use crate::models::ForecastEntry;

/// Number of synthetic days, starting today
pub const FALLBACK_DAYS: u8 = 3;
/// Local hours of the synthetic slots on each day
pub const FALLBACK_HOURS: [u32; 3] = [6, 12, 18];

const BASE_TEMPERATURE_C: f64 = 28.0;
const TEMPERATURE_STEP_C: f64 = 2.0;
const BASE_HUMIDITY_PCT: u8 = 60;
const HUMIDITY_STEP_PCT: u8 = 5;
const BASE_RAIN_PCT: u8 = 20;
const RAIN_STEP_PCT: u8 = 10;
const WIND_SPEED: f64 = 8.0;

/// Build the deterministic fallback forecast anchored to `now`'s local date.
///
/// Always 9 entries: 3 days x 06:00, 12:00 and 18:00. Values drift linearly
/// with the day offset.
#[must_use]
pub fn generate(now: DateTime<Tz>) -> Vec<ForecastEntry> {
    let today = now.date_naive();

    (0..FALLBACK_DAYS)
        .flat_map(|day| {
            let date = today
                .checked_add_days(Days::new(u64::from(day)))
                .unwrap_or(today);
            FALLBACK_HOURS.into_iter().map(move |hour| ForecastEntry {
                date,
                time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN),
                temperature: BASE_TEMPERATURE_C + TEMPERATURE_STEP_C * f64::from(day),
                humidity: BASE_HUMIDITY_PCT - HUMIDITY_STEP_PCT * day,
                rain_probability: BASE_RAIN_PCT + RAIN_STEP_PCT * day,
                wind_speed: WIND_SPEED,
                description: labels::PARTLY_CLOUDY.to_string(),
                advisory: None,
            })
        })
        .collect()
}
