//! # streetlampd: street lamp control daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize `tracing` with the configured filter
//! - Construct the weather provider, classifier and health sensor (adapters)
//! - Construct the lamp control service, injecting adapters via port traits
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use streetlamp_adapter_forest::ForestClassifier;
use streetlamp_adapter_http_axum::router;
use streetlamp_adapter_http_axum::state::AppState;
use streetlamp_adapter_sensors::SensorBackend;
use streetlamp_adapter_weatherapi::WeatherApiProvider;
use streetlamp_app::ports::SystemClock;
use streetlamp_app::services::lamp_control_service::LampControlService;
use streetlamp_domain::features::FeatureOrder;
use tracing_subscriber::EnvFilter;

use crate::config::{ClassifierConfig, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let settings = config.control_settings()?;

    // Adapters
    if config.weather.provider.api_key.is_empty() {
        tracing::warn!("no WeatherAPI key configured, weather fetches will be rejected");
    }
    let provider = WeatherApiProvider::new(config.weather.provider.clone())?;
    let classifier = load_classifier(&config.classifier, &settings.feature_order);
    let sensor = SensorBackend::from_config(&config.health)?;
    tracing::info!(backend = sensor.name(), "health sensor ready");

    // Service
    let service = LampControlService::new(provider, sensor, classifier, SystemClock, settings);
    tracing::info!(classifier_loaded = service.is_ready(), "lamp control service ready");

    // HTTP
    let app = router::build(AppState::new(service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        location = %config.weather.provider.location,
        "streetlampd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("streetlampd stopped");
    Ok(())
}

/// Load the forest model, or keep serving without one.
///
/// Without a classifier every control request is refused with
/// `classifier_unavailable`.
fn load_classifier(config: &ClassifierConfig, order: &FeatureOrder) -> Option<ForestClassifier> {
    match ForestClassifier::load(&config.model_path, order) {
        Ok(classifier) => Some(classifier),
        Err(err) => {
            tracing::error!(
                error = %err,
                path = %config.model_path.display(),
                "failed to load weather classifier, control requests will be refused"
            );
            None
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
