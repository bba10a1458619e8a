//! API error codes for assistant failures
//!
//! Each error is a `(code, http status, detail)` triple, the shape the
//! surrounding REST API uses for its error responses.

use assistant_application::AssistantError;
use serde::Serialize;

/// An API error definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub status: u16,
    pub detail: &'static str,
}

impl ApiError {
    const fn new(code: &'static str, status: u16, detail: &'static str) -> Self {
        Self {
            code,
            status,
            detail,
        }
    }
}

pub const ERROR_ASSISTANT_UNAVAILABLE: ApiError = ApiError::new(
    "ERROR_ASSISTANT_UNAVAILABLE",
    503,
    "The assistant is not available. Please try again later.",
);

pub const ERROR_ASSISTANT_CHAT_DOES_NOT_EXIST: ApiError = ApiError::new(
    "ERROR_ASSISTANT_CHAT_DOES_NOT_EXIST",
    404,
    "The requested chat does not exist.",
);

pub const ERROR_FEATURE_NOT_AVAILABLE: ApiError = ApiError::new(
    "ERROR_FEATURE_NOT_AVAILABLE",
    402,
    "The related feature is not available in your plan.",
);

pub const ERROR_ASSISTANT_INVALID_MESSAGE: ApiError = ApiError::new(
    "ERROR_ASSISTANT_INVALID_MESSAGE",
    400,
    "The message or chat title is not valid.",
);

pub const ERROR_ASSISTANT_MODEL_FAILED: ApiError = ApiError::new(
    "ERROR_ASSISTANT_MODEL_FAILED",
    502,
    "The assistant model failed to answer.",
);

pub const ERROR_ASSISTANT_STORAGE: ApiError = ApiError::new(
    "ERROR_ASSISTANT_STORAGE",
    500,
    "The assistant chat history could not be accessed.",
);

impl From<&AssistantError> for ApiError {
    fn from(err: &AssistantError) -> Self {
        match err {
            AssistantError::CapabilityUnavailable(_) => ERROR_ASSISTANT_UNAVAILABLE,
            AssistantError::NotFound(_) => ERROR_ASSISTANT_CHAT_DOES_NOT_EXIST,
            AssistantError::PermissionDenied(_) => ERROR_FEATURE_NOT_AVAILABLE,
            AssistantError::InvalidInput(_) => ERROR_ASSISTANT_INVALID_MESSAGE,
            AssistantError::Runtime(_) => ERROR_ASSISTANT_MODEL_FAILED,
            AssistantError::Storage(_) => ERROR_ASSISTANT_STORAGE,
        }
    }
}
