//! End-to-end smoke tests for the full streetlampd stack.
//!
//! Each test spins up the complete application (real WeatherAPI client
//! against a local fake server, real forest classifier, fixed sensor, real
//! service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use chrono::{NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use streetlamp_adapter_forest::ForestClassifier;
use streetlamp_adapter_http_axum::router;
use streetlamp_adapter_http_axum::state::AppState;
use streetlamp_adapter_sensors::FixedSensor;
use streetlamp_adapter_weatherapi::{WeatherApiConfig, WeatherApiProvider};
use streetlamp_app::ports::Clock;
use streetlamp_app::services::lamp_control_service::{ControlSettings, LampControlService};
use streetlamp_domain::features::FeatureOrder;
use tower::ServiceExt;

/// Hazardous when visibility (index 2) is at most 4 km.
const MODEL: &str = r#"{
    "feature_names": ["humidity", "cloudcover", "visibility", "uvindex", "day_of_year", "temp", "precip"],
    "trees": [
        {"split": {"feature": 2, "threshold": 4.0,
                   "left": {"leaf": {"class": 1}},
                   "right": {"leaf": {"class": 0}}}}
    ]
}"#;

struct FixedClock(NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn evening() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap(),
    )
}

fn forecast(vis_km: f64) -> serde_json::Value {
    serde_json::json!({
        "location": {"name": "Kuala Lumpur"},
        "current": {
            "last_updated_epoch": 1_717_248_600,
            "temp_c": 27.4,
            "humidity": 84,
            "precip_mm": 0.0,
            "cloud": 50,
            "vis_km": vis_km,
            "uv": 0.0
        },
        "forecast": {
            "forecastday": [{"astro": {"sunrise": "07:06 AM", "sunset": "07:23 PM"}}]
        }
    })
}

/// Serve a fake WeatherAPI on an ephemeral port and return its base URL.
async fn fake_weather_api(vis_km: f64) -> String {
    let api = Router::new().route(
        "/v1/forecast.json",
        get(move || async move { axum::Json(forecast(vis_km)) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api).await.unwrap();
    });
    format!("http://{addr}/v1")
}

/// Build a fully-wired router.
async fn app(vis_km: f64, temp_c: f64, model: Option<&str>) -> Router {
    let provider = WeatherApiProvider::new(WeatherApiConfig {
        base_url: fake_weather_api(vis_km).await,
        api_key: "test-key".to_string(),
        ..WeatherApiConfig::default()
    })
    .unwrap();
    let classifier =
        model.map(|json| ForestClassifier::from_json(json, &FeatureOrder::default()).unwrap());

    let service = LampControlService::new(
        provider,
        FixedSensor(temp_c),
        classifier,
        evening(),
        ControlSettings::default(),
    );

    router::build(AppState::new(service))
}

async fn control(app: Router, body: &'static str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/control_lamp")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let body = serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes())
        .unwrap();
    (status, body)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app(10.0, 40.0, Some(MODEL))
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

// ---------------------------------------------------------------------------
// Control cycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_dim_lamp_for_motion_on_clear_night() {
    let (status, body) = control(
        app(10.0, 40.0, Some(MODEL)).await,
        r#"{"is_motion_detected": true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "DIMMER_MOTION_DETECTED");
    assert_eq!(body["weather_data_for_chart"]["humidity"], 84.0);
    assert_eq!(body["weather_data_for_chart"]["is_night_time"], true);
    assert_eq!(body["inputs_used"]["location"], "Kuala Lumpur");
    assert_eq!(body["inputs_used"]["sunset"], "07:23 PM");
}

#[tokio::test]
async fn should_stay_off_without_motion_on_clear_night() {
    let (status, body) = control(app(10.0, 40.0, Some(MODEL)).await, "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "OFF_NO_MOTION");
    assert_eq!(body["lamp_action"], "OFF (No Motion Detected)");
}

#[tokio::test]
async fn should_force_max_output_in_fog() {
    let (status, body) = control(app(1.2, 40.0, Some(MODEL)).await, "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "MAX_OUTPUT_SAFETY_RAIN_FOG");
}

#[tokio::test]
async fn should_prefer_overheat_failsafe_over_weather() {
    let (status, body) = control(app(1.2, 58.0, Some(MODEL)).await, "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "MAX_OUTPUT_FAILSAFE_OVERHEAT");
    assert_eq!(body["system_health"]["current_temp_c"], 58.0);
}

#[tokio::test]
async fn should_refuse_control_without_classifier() {
    let (status, body) = control(app(10.0, 40.0, None).await, "{}").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "error");
    assert_eq!(body["kind"], "classifier_unavailable");
}
