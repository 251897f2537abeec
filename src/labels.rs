//! Fixed Urdu texts emitted by the service

/// Label used when the request asks for the default coordinate
pub const DEFAULT_CITY: &str = "کراچی";
/// Label used for any other coordinate
pub const SELECTED_LOCATION: &str = "منتخب مقام";

/// "Partly cloudy", used by the fallback forecast
pub const PARTLY_CLOUDY: &str = "جزوی بادل";

pub const STATUS_MESSAGE: &str = "کسان دوست موسم API چل رہی ہے";
pub const STATUS_ACTIVE: &str = "فعال";
