//! Error types for the dashboard API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use planck_ir::IrError;
use planck_qasm::CodecError;
use planck_render::RenderError;
use planck_templates::TemplateError;
use serde::Serialize;

use crate::advisor::AdvisorError;
use crate::service::ServiceError;

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    MalformedCircuitText(String),

    #[error("{0}")]
    QubitIndexOutOfRange(String),

    #[error("{0}")]
    TooManyColumns(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Advisor error: {0}")]
    AdvisorError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::UnknownAlgorithm(_) => (StatusCode::NOT_FOUND, "unknown_algorithm"),
            ApiError::MalformedCircuitText(_) => {
                (StatusCode::BAD_REQUEST, "malformed_circuit_text")
            }
            ApiError::QubitIndexOutOfRange(_) => {
                (StatusCode::BAD_REQUEST, "qubit_index_out_of_range")
            }
            ApiError::TooManyColumns(_) => (StatusCode::BAD_REQUEST, "too_many_columns"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::AdvisorError(_) => (StatusCode::BAD_GATEWAY, "advisor_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::Template(TemplateError::UnknownAlgorithm(_)) => {
                ApiError::UnknownAlgorithm(message)
            }
            ServiceError::Codec(CodecError::MalformedCircuitText(_)) => {
                ApiError::MalformedCircuitText(message)
            }
            ServiceError::Render(RenderError::Ir(IrError::QubitIndexOutOfRange { .. }))
            | ServiceError::Circuit(IrError::QubitIndexOutOfRange { .. }) => {
                ApiError::QubitIndexOutOfRange(message)
            }
            ServiceError::Render(RenderError::TooManyColumns { .. }) => {
                ApiError::TooManyColumns(message)
            }
            ServiceError::Render(RenderError::Ir(_))
            | ServiceError::Codec(CodecError::TooManyQubits { .. })
            | ServiceError::SourceTooLarge { .. }
            | ServiceError::TooManyQubits { .. } => ApiError::BadRequest(message),
            _ => ApiError::Internal(message),
        }
    }
}

impl From<AdvisorError> for ApiError {
    fn from(e: AdvisorError) -> Self {
        ApiError::AdvisorError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_mapping() {
        let err: ApiError =
            ServiceError::Template(TemplateError::UnknownAlgorithm("x".into())).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err: ApiError =
            ServiceError::Codec(CodecError::MalformedCircuitText("no qreg".into())).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err: ApiError = ServiceError::TooManyQubits {
            requested: 100,
            limit: 64,
        }
        .into();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err: ApiError = ServiceError::Codec(CodecError::TooManyQubits {
            requested: 65536,
            limit: 64,
        })
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err: ApiError = ServiceError::Render(RenderError::Svg("write".into())).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
