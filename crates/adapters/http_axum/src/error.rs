//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use casita_domain::error::CasitaError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps request failures to an HTTP status code and JSON error body.
///
/// The body strings are part of the API contract and must not drift.
#[derive(Debug)]
pub enum ApiError {
    /// Body was not parseable as JSON.
    MalformedJson,
    /// Body parsed but did not match the expected field set.
    MissingFields,
    /// No route matches the request.
    RouteNotFound,
    /// Domain-level failure (validation or missing entity).
    Domain(CasitaError),
}

impl From<CasitaError> for ApiError {
    fn from(err: CasitaError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MalformedJson => (StatusCode::BAD_REQUEST, "Invalid JSON".to_string()),
            Self::MissingFields => (
                StatusCode::BAD_REQUEST,
                "Missing required fields".to_string(),
            ),
            Self::RouteNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            Self::Domain(CasitaError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(CasitaError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
        };

        tracing::debug!(status = %status, error = %message, "request rejected");
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casita_domain::error::{NotFoundError, ValidationError};

    #[test]
    fn should_map_malformed_json_to_bad_request() {
        let response = ApiError::MalformedJson.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let response =
            ApiError::from(CasitaError::from(ValidationError::InvalidEmail)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_errors_to_not_found() {
        let err = NotFoundError {
            entity: "House",
            id: 999,
        };
        let response = ApiError::from(CasitaError::from(err)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_unmatched_route_to_not_found() {
        let response = ApiError::RouteNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
