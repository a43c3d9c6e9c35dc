//! HTTP error response mapping.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use streetlamp_domain::error::StreetlampError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    kind: &'static str,
    message: String,
}

/// Maps request and [`StreetlampError`] failures to an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be decoded.
    BadRequest(String),
    /// The decision cycle failed.
    Cycle(StreetlampError),
    /// A handler panicked.
    Panicked,
}

impl From<StreetlampError> for ApiError {
    fn from(err: StreetlampError) -> Self {
        Self::Cycle(err)
    }
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "invalid_request", message.clone())
            }
            Self::Cycle(err) => match err {
                StreetlampError::ProviderUnavailable(_) => (
                    StatusCode::BAD_GATEWAY,
                    "provider_unavailable",
                    err.to_string(),
                ),
                StreetlampError::ProviderTimeout { .. } => (
                    StatusCode::GATEWAY_TIMEOUT,
                    "provider_timeout",
                    err.to_string(),
                ),
                StreetlampError::ProviderSchema(schema) => (
                    StatusCode::BAD_GATEWAY,
                    "provider_schema",
                    format!("{err}: {schema}"),
                ),
                StreetlampError::ClassifierUnavailable => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "classifier_unavailable",
                    err.to_string(),
                ),
                StreetlampError::Sensor(_)
                | StreetlampError::Config(_)
                | StreetlampError::Internal(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "internal server error".to_string(),
                ),
            },
            Self::Panicked => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = self.parts();
        if let Self::Cycle(err) = &self
            && status.is_server_error()
        {
            let source = std::error::Error::source(err).map(ToString::to_string);
            tracing::error!(error = %err, source = ?source, kind, "decision cycle failed");
        }

        (
            status,
            Json(ErrorBody {
                status: "error",
                kind,
                message,
            }),
        )
            .into_response()
    }
}

/// Response for a panicking handler, used by the router's [`CatchPanicLayer`].
///
/// [`CatchPanicLayer`]: tower_http::catch_panic::CatchPanicLayer
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "request handler panicked");
    ApiError::Panicked.into_response()
}
