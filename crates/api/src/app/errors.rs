use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use roster_core::{DomainError, EntityId};
use roster_infra::StoreError;

/// Every way a request can fail.
///
/// Handlers return this through `?`; [`IntoResponse`] is the only place a
/// failure becomes a status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed body, non-numeric path id, or a missing/zero field.
    #[error("{0}")]
    InvalidInput(String),

    #[error("entity {0} not found")]
    NotFound(EntityId),

    /// A stored value could not be encoded. Always a defect on our side.
    #[error("failed to encode response: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::Serialization(_) => "serialization_failure",
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl From<JsonRejection> for ApiError {
    // Content-type and syntax problems are all plain bad input here.
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Serialization(msg) => tracing::error!(error = %msg, "response serialization failed"),
            other => tracing::debug!(error = %other, "request rejected"),
        }
        json_error(self.status(), self.code(), self.to_string())
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            ApiError::InvalidInput("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound(EntityId::new(1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Serialization("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_miss_becomes_not_found() {
        let err: ApiError = StoreError::NotFound(EntityId::new(999)).into();
        assert!(matches!(err, ApiError::NotFound(id) if id == EntityId::new(999)));
        assert_eq!(err.to_string(), "entity 999 not found");
    }

    #[test]
    fn validation_failure_becomes_invalid_input() {
        let err: ApiError = DomainError::validation("invalid/missing required fields: id").into();
        assert_eq!(err.code(), "invalid_input");
        assert_eq!(
            err.to_string(),
            "validation failed: invalid/missing required fields: id"
        );
    }

    #[test]
    fn response_carries_status() {
        let res = ApiError::NotFound(EntityId::new(4)).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
