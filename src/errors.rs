use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Inbound webhook body could not be parsed.
    MalformedPayload(String),
    /// The referenced lead does not exist in the CRM.
    LeadNotFound(String),
    /// Error interacting with the Bitrix REST API.
    BitrixApi(String),
    /// Internal server error.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
            AppError::LeadNotFound(msg) => write!(f, "Lead not found: {}", msg),
            AppError::BitrixApi(msg) => write!(f, "Bitrix API error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to a status code and a JSON `{"error": ...}` body.
    /// Bitrix API detail strings can embed the access-token-bearing URL, so they
    /// are logged server-side and replaced with a generic message in the body.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MalformedPayload(msg) => {
                // The original relay answered 500 for unparseable bodies; callers
                // depend on that, so this is intentionally not a 400.
                tracing::error!("Malformed webhook payload: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::LeadNotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BitrixApi(msg) => {
                tracing::error!("Bitrix API error: {}", msg);
                (StatusCode::BAD_GATEWAY, "bitrix api error".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::BitrixApi(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_payload_maps_to_500() {
        let response = AppError::MalformedPayload("bad json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn lead_not_found_maps_to_404() {
        let response = AppError::LeadNotFound("lead 42".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bitrix_api_maps_to_502() {
        let response = AppError::BitrixApi("timeout".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
