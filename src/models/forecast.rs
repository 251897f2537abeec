//! Forecast records, normalized entries and the response aggregate

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Coordinate;
use crate::irrigation::Advisory;
use crate::schema::{EntryField, ResponseField};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Provider-native forecast record
#[derive(Debug, Clone, PartialEq)]
pub struct RawForecastPoint {
    /// UTC Unix timestamp (seconds)
    pub timestamp: i64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Probability of precipitation, 0.0 - 1.0
    pub precipitation_probability: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Provider's weather description, as sent
    pub description: String,
}

/// One normalized forecast slot in local time
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Local date
    pub date: NaiveDate,
    /// Local time of day
    pub time: NaiveTime,
    /// Temperature in Celsius, one decimal
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Chance of rain in percent
    pub rain_probability: u8,
    /// Wind speed, one decimal
    pub wind_speed: f64,
    /// Title-cased description
    pub description: String,
    /// Irrigation advice, filled in by the assembler
    pub advisory: Option<Advisory>,
}

impl ForecastEntry {
    /// Local date as `YYYY-MM-DD`
    #[must_use]
    pub fn format_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Local time as `HH:MM`
    #[must_use]
    pub fn format_time(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

impl Serialize for ForecastEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.advisory.is_some() { 9 } else { 7 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(EntryField::Date.key(), &self.format_date())?;
        map.serialize_entry(EntryField::Time.key(), &self.format_time())?;
        map.serialize_entry(EntryField::Temperature.key(), &self.temperature)?;
        map.serialize_entry(EntryField::Humidity.key(), &self.humidity)?;
        map.serialize_entry(EntryField::RainProbability.key(), &self.rain_probability)?;
        map.serialize_entry(EntryField::WindSpeed.key(), &self.wind_speed)?;
        map.serialize_entry(EntryField::Weather.key(), &self.description)?;
        if let Some(advisory) = &self.advisory {
            map.serialize_entry(
                EntryField::IrrigationAdvice.key(),
                advisory.recommendation.text(),
            )?;
            map.serialize_entry(EntryField::Reason.key(), advisory.rationale.text())?;
        }
        map.end()
    }
}

/// Response aggregate returned by `GET /api/weather` and written as snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResponse {
    pub success: bool,
    /// Resolved location label
    pub city: String,
    pub coordinate: Coordinate,
    /// Forecast horizon in days
    pub forecast_days: u32,
    /// Enriched entries in chronological order
    pub entries: Vec<ForecastEntry>,
    /// Local time the response was generated
    pub generated_at: NaiveDateTime,
}

impl Serialize for ForecastResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ResponseField::ALL.len()))?;
        map.serialize_entry(ResponseField::Success.key(), &self.success)?;
        map.serialize_entry(ResponseField::City.key(), &self.city)?;
        map.serialize_entry(ResponseField::Latitude.key(), &self.coordinate.latitude)?;
        map.serialize_entry(ResponseField::Longitude.key(), &self.coordinate.longitude)?;
        map.serialize_entry(ResponseField::ForecastDays.key(), &self.forecast_days)?;
        map.serialize_entry(ResponseField::Data.key(), &self.entries)?;
        map.serialize_entry(
            ResponseField::GeneratedAt.key(),
            &self.generated_at.format(GENERATED_AT_FORMAT).to_string(),
        )?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irrigation;
    use crate::schema::EntryField;
    use serde_json::Value;

    fn sample_entry() -> ForecastEntry {
        ForecastEntry {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            temperature: 36.4,
            humidity: 35,
            rain_probability: 10,
            wind_speed: 4.2,
            description: "Clear Sky".to_string(),
            advisory: None,
        }
    }

    #[test]
    fn test_entry_serializes_with_urdu_keys() {
        let value = serde_json::to_value(sample_entry()).unwrap();

        assert_eq!(value["تاریخ"], "2024-06-01");
        assert_eq!(value["وقت"], "09:00");
        assert_eq!(value["درجہ حرارت"], 36.4);
        assert_eq!(value["نمی"], 35);
        assert_eq!(value["بارش کا امکان"], 10);
        assert_eq!(value["ہوا کی رفتار"], 4.2);
        assert_eq!(value["موسم"], "Clear Sky");
        assert!(value.get(EntryField::IrrigationAdvice.key()).is_none());
    }

    #[test]
    fn test_entry_serializes_advisory_when_present() {
        let mut entry = sample_entry();
        entry.advisory = Some(irrigation::advise(&entry));

        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), EntryField::ALL.len());
        assert_eq!(value["آبپاشی مشورہ"], "فوری آبپاشی کی ضرورت ہے");
        assert_eq!(value["وجہ"], "گرمی اور خشکی زیادہ ہے");
    }

    #[test]
    fn test_response_serialization_keeps_key_order() {
        let response = ForecastResponse {
            success: true,
            city: "کراچی".to_string(),
            coordinate: Coordinate::DEFAULT,
            forecast_days: 3,
            entries: vec![sample_entry()],
            generated_at: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(8, 30, 5)
                .unwrap(),
        };

        let json = serde_json::to_string(&response).unwrap();
        let positions: Vec<usize> = ResponseField::ALL
            .iter()
            .map(|field| json.find(&format!("\"{}\"", field.key())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["کامیاب"], true);
        assert_eq!(value["عرض البلد"], 24.8607);
        assert_eq!(value["طول البلد"], 67.0011);
        assert_eq!(value["پیشگوئی کے دن"], 3);
        assert_eq!(value["وقت"], "2024-06-01 08:30:05");
        assert_eq!(value["ڈیٹا"].as_array().unwrap().len(), 1);
    }
}
