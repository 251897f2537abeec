use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    forecast_service::ForecastService,
    labels,
    models::{Coordinate, ForecastResponse},
    schema::StatusField,
};

/// Query string of `GET /api/weather`; both values default to Karachi
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lon")]
    pub lon: f64,
}

fn default_lat() -> f64 {
    Coordinate::DEFAULT.latitude
}

fn default_lon() -> f64 {
    Coordinate::DEFAULT.longitude
}

pub fn router(service: Arc<ForecastService>) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .with_state(service)
}

/// Service status, `GET /`
pub async fn status() -> Json<Value> {
    let mut body = Map::new();
    body.insert(StatusField::Message.key().into(), labels::STATUS_MESSAGE.into());
    body.insert(StatusField::State.key().into(), labels::STATUS_ACTIVE.into());
    Json(Value::Object(body))
}

async fn get_weather(
    State(service): State<Arc<ForecastService>>,
    Query(query): Query<WeatherQuery>,
) -> Json<ForecastResponse> {
    let coordinate = Coordinate::new(query.lat, query.lon);
    Json(service.get_forecast(coordinate).await)
}
