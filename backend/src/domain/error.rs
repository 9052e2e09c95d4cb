//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses and decide which status code each [`ErrorCode`] carries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Stable machine-readable error kind describing the failure category.
///
/// The serialised form is the `error` field of the outward error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Required input is missing or carries an illegal value.
    ValidationError,
    /// Optional input is syntactically wrong (page, year).
    InvalidRequest,
    /// A path parameter could not be parsed.
    InvalidParameter,
    /// The upstream provider has no movie with the requested id.
    MovieNotFound,
    /// The upstream provider has no TV show with the requested id.
    TvNotFound,
    /// The upstream provider has no person with the requested id.
    PersonNotFound,
    /// No route matches the requested path.
    NotFound,
    /// The endpoint exists but does not accept the HTTP verb.
    MethodNotAllowed,
    /// A lookup against the upstream provider failed.
    ApiError,
    /// A search against the upstream provider failed.
    SearchError,
    /// An unexpected failure inside the gateway.
    InternalError,
}

impl ErrorCode {
    /// Wire label of the code, as emitted in error envelopes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "validation_error",
            Self::InvalidRequest => "invalid_request",
            Self::InvalidParameter => "invalid_parameter",
            Self::MovieNotFound => "movie_not_found",
            Self::TvNotFound => "tv_not_found",
            Self::PersonNotFound => "person_not_found",
            Self::NotFound => "not_found",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::ApiError => "api_error",
            Self::SearchError => "search_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
/// - `trace_id` is captured from the task-local [`TraceId`] at construction
///   time when one is in scope.
///
/// # Examples
/// ```
/// use media_gateway::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::MovieNotFound, "Movie with ID 1 not found");
/// assert_eq!(err.code(), ErrorCode::MovieNotFound);
/// assert_eq!(err.message(), "Movie with ID 1 not found");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

/// Validation failures raised by [`Error::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was blank.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Create a new error.
    ///
    /// Blank messages are replaced by the wire label of `code` so every
    /// envelope carries something readable.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message).unwrap_or_else(|_| Self {
            code,
            message: code.as_str().to_owned(),
            trace_id: current_trace_id(),
            details: None,
        })
    }

    /// Fallible constructor rejecting blank messages.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            trace_id: current_trace_id(),
            details: None,
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured when the error was raised.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a correlation identifier explicitly.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use media_gateway::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::validation("Query parameter is required")
    ///     .with_details(json!({ "field": "query" }));
    /// assert_eq!(err.details(), Some(&json!({ "field": "query" })));
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::ValidationError`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidParameter`].
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParameter, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::MethodNotAllowed`].
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MethodNotAllowed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

fn current_trace_id() -> Option<String> {
    TraceId::current().map(|id| id.to_string())
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ErrorCode::ValidationError, "\"validation_error\"")]
    #[case(ErrorCode::InvalidRequest, "\"invalid_request\"")]
    #[case(ErrorCode::TvNotFound, "\"tv_not_found\"")]
    #[case(ErrorCode::MethodNotAllowed, "\"method_not_allowed\"")]
    #[case(ErrorCode::SearchError, "\"search_error\"")]
    fn codes_serialise_to_their_wire_labels(#[case] code: ErrorCode, #[case] expected: &str) {
        let encoded = serde_json::to_string(&code).expect("code serialises");
        assert_eq!(encoded, expected);
        assert_eq!(format!("\"{code}\""), expected);
    }

    #[rstest]
    fn try_new_rejects_blank_messages() {
        let result = Error::try_new(ErrorCode::ApiError, "   ");
        assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
    }

    #[rstest]
    fn new_falls_back_to_the_code_label_for_blank_messages() {
        let err = Error::new(ErrorCode::ApiError, "");
        assert_eq!(err.message(), "api_error");
    }

    #[rstest]
    fn trace_id_is_absent_out_of_scope() {
        assert!(Error::internal("boom").trace_id().is_none());
    }

    #[tokio::test]
    async fn trace_id_is_captured_in_scope() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("valid uuid");
        let err = TraceId::scope(trace_id, async { Error::validation("bad") }).await;
        assert_eq!(err.trace_id(), Some("00000000-0000-0000-0000-000000000000"));
    }

    #[rstest]
    fn details_are_attached() {
        let err = Error::invalid_request("bad page").with_details(json!({"field": "page"}));
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.details(), Some(&json!({"field": "page"})));
    }
}
