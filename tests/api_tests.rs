//! End-to-end tests of the HTTP API

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Days, NaiveDate, Utc};
use http_body_util::BodyExt;
use kisan_dost::{
    FORECAST_DAYS, FileSnapshotSink, ForecastService, OpenWeatherClient, config::WeatherConfig,
    web,
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn build_app(provider_url: &str, snapshot: &Path) -> Router {
    let provider = OpenWeatherClient::new(&WeatherConfig {
        api_key: Some("integration-key".to_string()),
        base_url: provider_url.to_string(),
        timeout_seconds: 2,
    })
    .unwrap();
    let service = ForecastService::new(
        Arc::new(provider),
        Arc::new(FileSnapshotSink::new(snapshot)),
        chrono_tz::Asia::Karachi,
    );
    web::app(Arc::new(service))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn failing_provider() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    server
}

fn karachi_today() -> NaiveDate {
    Utc::now().with_timezone(&chrono_tz::Asia::Karachi).date_naive()
}

#[tokio::test]
async fn test_root_reports_active_status() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app("http://127.0.0.1:9", &dir.path().join("out.json"));

    let (status, body) = get_json(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["پیغام"], "کسان دوست موسم API چل رہی ہے");
    assert_eq!(body["حالت"], "فعال");
}

#[tokio::test]
async fn test_provider_failure_still_returns_fallback() {
    let server = failing_provider().await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(&server.uri(), &dir.path().join("out.json"));

    let (status, body) = get_json(app, "/api/weather").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["کامیاب"], true);
    assert_eq!(body["شہر"], "کراچی");
    assert_eq!(body["عرض البلد"], 24.8607);
    assert_eq!(body["طول البلد"], 67.0011);
    assert_eq!(body["پیشگوئی کے دن"], 3);

    let data = body["ڈیٹا"].as_array().unwrap();
    assert_eq!(data.len(), 9);

    let today = karachi_today();
    for (i, entry) in data.iter().enumerate() {
        let day = (i / 3) as u64;
        let expected_date = today + Days::new(day);
        assert_eq!(entry["تاریخ"], expected_date.format("%Y-%m-%d").to_string());
        assert_eq!(entry["وقت"], ["06:00", "12:00", "18:00"][i % 3]);
        assert_eq!(entry["درجہ حرارت"], 28.0 + 2.0 * day as f64);
        assert_eq!(entry["نمی"], 60 - 5 * day);
        assert_eq!(entry["ہوا کی رفتار"], 8.0);
        assert_eq!(entry["موسم"], "جزوی بادل");
        assert!(entry["آبپاشی مشورہ"].is_string());
        assert!(entry["وجہ"].is_string());
    }
}

#[tokio::test]
async fn test_custom_coordinate_gets_generic_label() {
    let server = failing_provider().await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(&server.uri(), &dir.path().join("out.json"));

    let (status, body) = get_json(app, "/api/weather?lat=31.5204&lon=74.3587").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["شہر"], "منتخب مقام");
    assert_eq!(body["عرض البلد"], 31.5204);
    assert_eq!(body["طول البلد"], 74.3587);
}

#[tokio::test]
async fn test_snapshot_file_matches_response_body() {
    let server = failing_provider().await;
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("urdu_weather_forecast.json");
    let app = build_app(&server.uri(), &snapshot);

    let (_, body) = get_json(app, "/api/weather?lat=30.1&lon=71.4").await;

    let content = std::fs::read_to_string(&snapshot).unwrap();
    let persisted: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(persisted, body);
    assert!(content.contains("منتخب مقام"));
}

#[tokio::test]
async fn test_live_forecast_respects_horizon() {
    let server = MockServer::start().await;
    let start = Utc::now().timestamp();
    // 6 days of 3-hourly points, more than the horizon allows
    let list: Vec<Value> = (0..48)
        .map(|i| {
            serde_json::json!({
                "dt": start + i * 3 * 3600,
                "main": {"temp": 24.96, "humidity": 72},
                "weather": [{"description": "moderate rain"}],
                "wind": {"speed": 6.04},
                "pop": 0.84
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": list })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let app = build_app(&server.uri(), &dir.path().join("out.json"));

    let (status, body) = get_json(app, "/api/weather").await;
    assert_eq!(status, StatusCode::OK);

    let data = body["ڈیٹا"].as_array().unwrap();
    assert!(!data.is_empty());
    assert!(data.len() < 48);

    let today = karachi_today();
    let max_date = today + Days::new(u64::from(FORECAST_DAYS));
    for entry in data {
        let date =
            NaiveDate::parse_from_str(entry["تاریخ"].as_str().unwrap(), "%Y-%m-%d").unwrap();
        assert!(date >= today && date <= max_date);
        assert_eq!(entry["درجہ حرارت"], 25.0);
        assert_eq!(entry["نمی"], 72);
        assert_eq!(entry["بارش کا امکان"], 84);
        assert_eq!(entry["ہوا کی رفتار"], 6.0);
        assert_eq!(entry["موسم"], "Moderate Rain");
        assert_eq!(entry["آبپاشی مشورہ"], "پانی دینے کی ضرورت نہیں");
        assert_eq!(entry["وجہ"], "بارش کے زیادہ امکانات ہیں");
    }
}

#[tokio::test]
async fn test_unparsable_coordinate_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app("http://127.0.0.1:9", &dir.path().join("out.json"));

    let (status, _) = get_json(app, "/api/weather?lat=north").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
