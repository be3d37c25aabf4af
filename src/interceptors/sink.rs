use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::error::ErrorCode;
use super::response::ApiError;

/// Output channel for a single request.
///
/// Formatters call `write` once per helper invocation. Writing the same sink
/// twice is a caller bug; implementations are free to keep either write.
#[cfg_attr(test, mockall::automock)]
pub trait ResponseSink {
    fn write(&mut self, status: StatusCode, body: Value);
}

/// Sink that buffers the written envelope and turns it into an axum
/// [`Response`] when returned from a handler.
#[derive(Debug, Default)]
pub struct ResponseSlot {
    written: Option<(StatusCode, Value)>,
}

impl ResponseSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_written(&self) -> bool {
        self.written.is_some()
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.written.as_ref().map(|(status, _)| *status)
    }

    pub fn body(&self) -> Option<&Value> {
        self.written.as_ref().map(|(_, body)| body)
    }
}

impl ResponseSink for ResponseSlot {
    fn write(&mut self, status: StatusCode, body: Value) {
        if let Some((previous, _)) = &self.written {
            tracing::warn!(
                previous = %previous,
                status = %status,
                "response written more than once, keeping the last write"
            );
        }
        self.written = Some((status, body));
    }
}

impl IntoResponse for ResponseSlot {
    fn into_response(self) -> Response {
        match self.written {
            Some((status, body)) => (status, Json(body)).into_response(),
            None => {
                tracing::error!("handler returned without writing a response");
                let body = ApiError::new(
                    "no response was produced",
                    ErrorCode::InternalError.as_str(),
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slot_keeps_last_write() {
        let mut slot = ResponseSlot::new();
        assert!(!slot.is_written());

        slot.write(StatusCode::OK, json!({ "n": 1 }));
        slot.write(StatusCode::CREATED, json!({ "n": 2 }));

        assert_eq!(slot.status(), Some(StatusCode::CREATED));
        assert_eq!(slot.body(), Some(&json!({ "n": 2 })));
    }

    #[test]
    fn unwritten_slot_becomes_internal_error() {
        let response = ResponseSlot::new().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn written_slot_keeps_status() {
        let mut slot = ResponseSlot::new();
        slot.write(StatusCode::NOT_FOUND, json!({ "success": false }));

        assert_eq!(slot.into_response().status(), StatusCode::NOT_FOUND);
    }
}
