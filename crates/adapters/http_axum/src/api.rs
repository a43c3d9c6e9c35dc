//! JSON REST API handlers.
//!
//! - `POST /api/control_lamp` runs one decision cycle

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde::{Deserialize, Serialize};

use streetlamp_app::ports::{Clock, HealthSensor, WeatherClassifier, WeatherProvider};
use streetlamp_app::services::lamp_control_service::ControlOutcome;
use streetlamp_domain::features::FeatureVector;
use streetlamp_domain::health::HealthStatus;
use streetlamp_domain::id::DecisionId;
use streetlamp_domain::lamp::LampAction;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<W, H, C, K>() -> Router<AppState<W, H, C, K>>
where
    W: WeatherProvider + 'static,
    H: HealthSensor + 'static,
    C: WeatherClassifier + 'static,
    K: Clock + 'static,
{
    Router::new().route("/control_lamp", post(control_lamp::<W, H, C, K>))
}

/// Request body for a control cycle.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ControlLampRequest {
    pub is_motion_detected: bool,
}

impl ControlLampRequest {
    /// Decode a possibly empty body; an empty body means no motion.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BadRequest`] when the body is not a valid request.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|err| ApiError::BadRequest(err.to_string()))
    }
}

/// The inputs a decision was made from, echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct InputsUsed {
    pub is_night_time: bool,
    pub is_motion_detected: bool,
    pub location: String,
    pub sunrise: String,
    pub sunset: String,
}

/// Successful control cycle.
#[derive(Debug, Serialize)]
pub struct ControlLampResponse {
    pub status: &'static str,
    pub decision_id: DecisionId,
    pub lamp_action: &'static str,
    pub action: LampAction,
    pub system_health: HealthStatus,
    pub weather_data_for_chart: FeatureVector,
    pub inputs_used: InputsUsed,
}

impl From<ControlOutcome> for ControlLampResponse {
    fn from(outcome: ControlOutcome) -> Self {
        let ControlOutcome {
            decision,
            astronomy,
            location,
        } = outcome;
        Self {
            status: "success",
            decision_id: decision.id,
            lamp_action: decision.action.label(),
            action: decision.action,
            system_health: decision.health,
            weather_data_for_chart: decision.features,
            inputs_used: InputsUsed {
                is_night_time: decision.is_night,
                is_motion_detected: decision.motion_detected,
                location,
                sunrise: astronomy.sunrise,
                sunset: astronomy.sunset,
            },
        }
    }
}

/// Possible responses from the control endpoint.
pub enum ControlResponse {
    Ok(Json<ControlLampResponse>),
}

impl IntoResponse for ControlResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/control_lamp`
pub async fn control_lamp<W, H, C, K>(
    State(state): State<AppState<W, H, C, K>>,
    body: Bytes,
) -> Result<ControlResponse, ApiError>
where
    W: WeatherProvider + 'static,
    H: HealthSensor + 'static,
    C: WeatherClassifier + 'static,
    K: Clock + 'static,
{
    let request = ControlLampRequest::from_body(&body)?;
    let outcome = state
        .control_service
        .control(request.is_motion_detected)
        .await?;
    Ok(ControlResponse::Ok(Json(outcome.into())))
}
