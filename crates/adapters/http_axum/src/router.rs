//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use streetlamp_app::ports::{Clock, HealthSensor, WeatherClassifier, WeatherProvider};

use crate::error::panic_response;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level, a permissive CORS layer for
/// browser dashboards served from another origin, and a [`CatchPanicLayer`]
/// that turns a panicking handler into the usual JSON `internal` error.
pub fn build<W, H, C, K>(state: AppState<W, H, C, K>) -> Router
where
    W: WeatherProvider + 'static,
    H: HealthSensor + 'static,
    C: WeatherClassifier + 'static,
    K: Clock + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
