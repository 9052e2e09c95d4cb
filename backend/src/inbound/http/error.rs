//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON body written for every failed request.
///
/// ```json
/// {"error": "movie_not_found", "message": "Movie with ID 9 not found", "code": 404}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Stable machine-readable error kind.
    #[schema(value_type = crate::inbound::http::schemas::ErrorCodeSchema)]
    pub error: ErrorCode,
    /// Human-readable description.
    pub message: String,
    /// HTTP status code repeated in the body.
    pub code: u16,
    /// Offending field for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationError | ErrorCode::InvalidRequest | ErrorCode::InvalidParameter => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::MovieNotFound
        | ErrorCode::TvNotFound
        | ErrorCode::PersonNotFound
        | ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::ApiError | ErrorCode::SearchError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<&Error> for ErrorEnvelope {
    fn from(error: &Error) -> Self {
        let code = error.code();
        let status = status_for(code).as_u16();
        if matches!(code, ErrorCode::InternalError) {
            return Self {
                error: code,
                message: "Internal server error".to_owned(),
                code: status,
                details: None,
            };
        }
        Self {
            error: code,
            message: error.message().to_owned(),
            code: status,
            details: error.details().cloned(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(ErrorEnvelope::from(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
