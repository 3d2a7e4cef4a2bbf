use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ledger_dns_domain::DomainError;
use serde_json::json;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::RecordNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::InvalidRecord(_) | DomainError::InvalidDomainName(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }

            DomainError::StoreUnavailable(_) => {
                error!(error = %self.0, "Record store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "record store unavailable".to_string(),
                )
            }

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
