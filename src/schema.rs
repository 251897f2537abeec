//! Output key schema
//!
//! The JSON keys returned by the API (and written to the snapshot file) are
//! Urdu words. They are enumerated here so that renaming a key is a single
//! change instead of a hunt through string literals.

/// Keys of the top-level forecast response object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseField {
    Success,
    City,
    Latitude,
    Longitude,
    ForecastDays,
    Data,
    GeneratedAt,
}

impl ResponseField {
    pub const ALL: [ResponseField; 7] = [
        ResponseField::Success,
        ResponseField::City,
        ResponseField::Latitude,
        ResponseField::Longitude,
        ResponseField::ForecastDays,
        ResponseField::Data,
        ResponseField::GeneratedAt,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ResponseField::Success => "کامیاب",
            ResponseField::City => "شہر",
            ResponseField::Latitude => "عرض البلد",
            ResponseField::Longitude => "طول البلد",
            ResponseField::ForecastDays => "پیشگوئی کے دن",
            ResponseField::Data => "ڈیٹا",
            ResponseField::GeneratedAt => "وقت",
        }
    }
}

/// Keys of one forecast entry inside the response's data array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Date,
    Time,
    Temperature,
    Humidity,
    RainProbability,
    WindSpeed,
    Weather,
    IrrigationAdvice,
    Reason,
}

impl EntryField {
    pub const ALL: [EntryField; 9] = [
        EntryField::Date,
        EntryField::Time,
        EntryField::Temperature,
        EntryField::Humidity,
        EntryField::RainProbability,
        EntryField::WindSpeed,
        EntryField::Weather,
        EntryField::IrrigationAdvice,
        EntryField::Reason,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            EntryField::Date => "تاریخ",
            EntryField::Time => "وقت",
            EntryField::Temperature => "درجہ حرارت",
            EntryField::Humidity => "نمی",
            EntryField::RainProbability => "بارش کا امکان",
            EntryField::WindSpeed => "ہوا کی رفتار",
            EntryField::Weather => "موسم",
            EntryField::IrrigationAdvice => "آبپاشی مشورہ",
            EntryField::Reason => "وجہ",
        }
    }
}

/// Keys of the service status object returned by `GET /`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    Message,
    State,
}

impl StatusField {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            StatusField::Message => "پیغام",
            StatusField::State => "حالت",
        }
    }
}
