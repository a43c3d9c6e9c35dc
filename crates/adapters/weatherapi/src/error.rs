//! WeatherAPI adapter error types.

use streetlamp_domain::error::{SchemaError, StreetlampError};

/// Errors specific to the WeatherAPI adapter.
#[derive(Debug, thiserror::Error)]
pub enum WeatherApiError {
    /// Building the client, connecting, or reading the body failed.
    #[error("WeatherAPI request failed")]
    Http(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("WeatherAPI returned status {0}")]
    Status(reqwest::StatusCode),

    /// The body is not JSON.
    #[error("WeatherAPI body is not JSON")]
    Body(#[source] serde_json::Error),

    /// The JSON lacks a required field.
    #[error("WeatherAPI response is malformed")]
    Schema(#[from] SchemaError),
}

// Request URLs carry the API key, so errors never keep them.
impl From<reqwest::Error> for WeatherApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

impl From<WeatherApiError> for StreetlampError {
    fn from(err: WeatherApiError) -> Self {
        match err {
            WeatherApiError::Schema(err) => Self::ProviderSchema(err),
            WeatherApiError::Body(_) => Self::ProviderSchema(SchemaError::new("$")),
            other => Self::ProviderUnavailable(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_error() {
        let err = WeatherApiError::Status(reqwest::StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "WeatherAPI returned status 403 Forbidden");
    }

    #[test]
    fn should_convert_status_to_provider_unavailable() {
        let err: StreetlampError =
            WeatherApiError::Status(reqwest::StatusCode::BAD_GATEWAY).into();
        assert!(matches!(err, StreetlampError::ProviderUnavailable(_)));
    }

    #[test]
    fn should_convert_schema_error_to_provider_schema() {
        let err: StreetlampError =
            WeatherApiError::Schema(SchemaError::new("current.cloud")).into();
        assert!(matches!(
            err,
            StreetlampError::ProviderSchema(SchemaError { ref field }) if field == "current.cloud"
        ));
    }

    #[test]
    fn should_convert_non_json_body_to_provider_schema() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: StreetlampError = WeatherApiError::Body(json_err).into();
        assert!(matches!(err, StreetlampError::ProviderSchema(_)));
    }
}
