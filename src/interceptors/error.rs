use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;
use validator::ValidationErrors;

use super::response::ApiError;
use super::status::{OutcomeKind, StatusPolicy};

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {message}")]
    Validation { message: String, fields: Value },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error codes for API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    SerializationError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::Forbidden(_) => ErrorCode::Forbidden,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::Serialization(_) => ErrorCode::SerializationError,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Outcome this error is reported as. Kinds the caller could not
    /// classify fall under the generic error outcome.
    pub fn outcome_kind(&self) -> OutcomeKind {
        match self {
            AppError::BadRequest(_) | AppError::Validation { .. } => OutcomeKind::BadRequest,
            AppError::Unauthorized(_) => OutcomeKind::Unauthorized,
            AppError::Forbidden(_) => OutcomeKind::Forbidden,
            AppError::NotFound(_) => OutcomeKind::NotFound,
            AppError::Conflict(_) => OutcomeKind::Conflict,
            AppError::Serialization(_) | AppError::Internal(_) => OutcomeKind::Error,
        }
    }

    /// Status under the default policy.
    pub fn status_code(&self) -> StatusCode {
        StatusPolicy::default().status_for(self.outcome_kind())
    }

    /// Errors the caller could not classify. Their details stay hidden.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::Internal(_) | AppError::Serialization(_))
    }

    /// Message that is safe to show to API clients.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Validation { message, .. } => message.clone(),
            AppError::Serialization(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
        }
    }

    /// Build the error envelope under `message`. Validation field errors are
    /// always attached; the underlying reason of internal errors only when
    /// `expose_details` is set.
    pub fn to_api_error(&self, message: &str, expose_details: bool) -> ApiError {
        let code = self.error_code().as_str();

        let details = match self {
            AppError::Validation { fields, .. } => Some(json!({ "fields": fields })),
            AppError::Serialization(err) if expose_details => {
                Some(json!({ "reason": err.to_string() }))
            }
            AppError::Internal(reason) if expose_details => Some(json!({ "reason": reason })),
            AppError::Serialization(_) | AppError::Internal(_) => None,
            _ => {
                let reason = self.public_message();
                (reason != message).then(|| json!({ "reason": reason }))
            }
        };

        match details {
            Some(details) => ApiError::with_details(message, code, details),
            None => ApiError::new(message, code),
        }
    }
}

// Handlers that bubble errors with `?` get the same envelope as the
// controller's error helper, without internal details.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = ?self, "Application error");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let status = self.status_code();
        let body = self.to_api_error(&self.public_message(), false);
        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Map::new();
        let mut summary = Vec::new();

        for (field, errors) in errors.field_errors() {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();

            let field = camel_case(field);
            summary.push(format!("{}: {}", field, messages.join(", ")));
            fields.insert(field, json!(messages));
        }
        summary.sort();

        AppError::Validation {
            message: summary.join("; "),
            fields: Value::Object(fields),
        }
    }
}

// Field errors are keyed by Rust field name; the API speaks camelCase.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
