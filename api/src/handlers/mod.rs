pub mod health;
pub mod metrics;
pub mod tasks;
pub mod users;

// Common response types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::errors::ServiceError;
use common::telemetry;
use serde::{Deserialize, Serialize};

/// Standard API error response.
///
/// The transport status and the embedded `status_code` always agree.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub error: String,
    pub detail: String,
    pub trace_id: String,
}

impl ErrorResponse {
    pub fn new(status_code: u16, error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status_code,
            error: error.into(),
            detail: detail.into(),
            trace_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

impl From<ServiceError> for ErrorResponse {
    fn from(err: ServiceError) -> Self {
        telemetry::record_request_error(err.kind());

        let detail = match &err {
            ServiceError::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
                "Internal server error".to_string()
            }
            other => {
                tracing::debug!(error = %other, "Request rejected");
                other.to_string()
            }
        };

        ErrorResponse::new(err.status_code(), err.kind(), detail)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}

/// Acknowledgement returned by create, update and delete endpoints
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionResponse {
    pub status_code: u16,
    pub transaction: String,
}

impl TransactionResponse {
    pub fn ok(transaction: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            transaction: transaction.into(),
        }
    }

    pub fn created(transaction: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::CREATED.as_u16(),
            transaction: transaction.into(),
        }
    }
}

impl IntoResponse for TransactionResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::errors::DatabaseError;

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ErrorResponse =
            ServiceError::NotFound("Task was not found.".to_string()).into();
        assert_eq!(response.status_code, 404);
        assert_eq!(response.error, "not_found");
        assert_eq!(response.detail, "Task was not found.");
        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_detail_is_hidden() {
        let response: ErrorResponse =
            ServiceError::Database(DatabaseError::QueryFailed("password=secret".to_string()))
                .into();
        assert_eq!(response.status_code, 500);
        assert!(!response.detail.contains("secret"));
    }

    #[test]
    fn test_transaction_response_status() {
        let created = TransactionResponse::created("Successful.");
        assert_eq!(created.status_code, 201);
        assert_eq!(created.into_response().status(), StatusCode::CREATED);
        assert_eq!(
            TransactionResponse::ok("Task delete is successful.")
                .into_response()
                .status(),
            StatusCode::OK
        );
    }
}
