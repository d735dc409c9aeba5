//! API error responses
//!
//! Two failure classes leave a handler: validation failures carry
//! field-level detail back to the client as 422; store failures are
//! logged server-side and collapse to a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::gateway::GatewayError;
use crate::schema::ValidationError;
use crate::store::StorageError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body violated the resource schema
    #[error("request body failed validation")]
    Validation(Vec<ValidationError>),

    /// Document store failed
    #[error("document store operation failed")]
    Storage(#[from] StorageError),
}

impl From<GatewayError> for ApiError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Validation(errors) => ApiError::Validation(errors),
            GatewayError::Storage(error) => ApiError::Storage(error),
        }
    }
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// Field-level failures, present for validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let detail = match err {
            ApiError::Validation(errors) => serde_json::to_value(errors).ok(),
            ApiError::Storage(_) => None,
        };
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(cause) = &self {
            // clients get the generic body; the cause stays server-side
            tracing::error!(error = %cause, "store operation failed");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(vec![ValidationError::required("name")]).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Storage(StorageError::Unavailable("down".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_body_carries_detail() {
        let err = ApiError::Validation(vec![ValidationError::required("price")]);
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 422);
        assert_eq!(
            body.detail,
            Some(json!([{"field": "price", "reason": "required"}]))
        );
    }

    #[test]
    fn test_storage_body_is_generic() {
        let err = ApiError::Storage(StorageError::Unavailable("password in dsn".into()));
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 500);
        assert_eq!(body.error, "document store operation failed");
        assert!(body.detail.is_none());
        // the cause never reaches the wire
        assert!(!serde_json::to_string(&body).unwrap().contains("password"));
    }

    #[test]
    fn test_gateway_error_conversion() {
        let api: ApiError = GatewayError::Validation(vec![ValidationError::required("date")]).into();
        assert!(matches!(api, ApiError::Validation(ref e) if e.len() == 1));

        let api: ApiError = GatewayError::Storage(StorageError::Rejected("bad".into())).into();
        assert!(matches!(api, ApiError::Storage(_)));
    }
}
