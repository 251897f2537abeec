//! Irrigation advisory
//!
//! Maps one forecast entry's temperature, humidity and rain probability to a
//! recommendation and the reason behind it. Rules are evaluated in priority
//! order and the first match wins:
//!
//! 1. rain probability > 70 %: no irrigation, rain is likely
//! 2. temperature > 35 °C and humidity < 40 %: urgent irrigation
//! 3. temperature > 30 °C and humidity < 60 %: light irrigation
//! 4. otherwise: no irrigation, pleasant weather

use crate::models::ForecastEntry;

const RAIN_LIKELY_PCT: u8 = 70;
const URGENT_TEMPERATURE_C: f64 = 35.0;
const URGENT_HUMIDITY_PCT: u8 = 40;
const LIGHT_TEMPERATURE_C: f64 = 30.0;
const LIGHT_HUMIDITY_PCT: u8 = 60;

/// What the farmer should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    NoIrrigationNeeded,
    UrgentIrrigation,
    LightIrrigation,
}

impl Recommendation {
    /// Urdu text sent to clients
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Recommendation::NoIrrigationNeeded => "پانی دینے کی ضرورت نہیں",
            Recommendation::UrgentIrrigation => "فوری آبپاشی کی ضرورت ہے",
            Recommendation::LightIrrigation => "ہلکی آبپاشی کی تجویز ہے",
        }
    }
}

/// Why the recommendation was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rationale {
    HighChanceOfRain,
    HeatAndDryness,
    ModerateButDry,
    PleasantWeather,
}

impl Rationale {
    /// Urdu text sent to clients
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Rationale::HighChanceOfRain => "بارش کے زیادہ امکانات ہیں",
            Rationale::HeatAndDryness => "گرمی اور خشکی زیادہ ہے",
            Rationale::ModerateButDry => "درجہ حرارت معتدل مگر خشکی موجود ہے",
            Rationale::PleasantWeather => "موسم خوشگوار ہے",
        }
    }
}

/// Recommendation plus rationale for one forecast slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub recommendation: Recommendation,
    pub rationale: Rationale,
}

/// Decide irrigation need from raw readings
#[must_use]
pub fn assess(temperature: f64, humidity: u8, rain_probability: u8) -> Advisory {
    let (recommendation, rationale) = if rain_probability > RAIN_LIKELY_PCT {
        (Recommendation::NoIrrigationNeeded, Rationale::HighChanceOfRain)
    } else if temperature > URGENT_TEMPERATURE_C && humidity < URGENT_HUMIDITY_PCT {
        (Recommendation::UrgentIrrigation, Rationale::HeatAndDryness)
    } else if temperature > LIGHT_TEMPERATURE_C && humidity < LIGHT_HUMIDITY_PCT {
        (Recommendation::LightIrrigation, Rationale::ModerateButDry)
    } else {
        (Recommendation::NoIrrigationNeeded, Rationale::PleasantWeather)
    };

    Advisory {
        recommendation,
        rationale,
    }
}

/// Decide irrigation need for a forecast entry
#[must_use]
pub fn advise(entry: &ForecastEntry) -> Advisory {
    assess(entry.temperature, entry.humidity, entry.rain_probability)
}
