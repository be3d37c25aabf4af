use axum::http::StatusCode;
use serde::Serialize;
use serde_json::json;

use super::error::{AppError, ErrorCode};
use super::response::{ApiError, ApiSuccess, Page};
use super::sink::ResponseSink;
use super::status::{OutcomeKind, StatusPolicy};

/// Turns an outcome into an envelope and writes it to a sink.
///
/// Every method writes to `sink` exactly once and never fails; problems
/// building the envelope are reported through the envelope itself.
pub trait ResponseFormatter {
    fn success<T: Serialize>(&self, sink: &mut dyn ResponseSink, data: Option<T>, message: &str);

    fn handle_error(&self, sink: &mut dyn ResponseSink, error: &AppError, message: &str);

    fn paginated<T: Serialize>(&self, sink: &mut dyn ResponseSink, page: Page<T>, message: &str);

    fn unauthorized(&self, sink: &mut dyn ResponseSink, message: &str);

    fn forbidden(&self, sink: &mut dyn ResponseSink, message: &str);

    fn not_found(&self, sink: &mut dyn ResponseSink, message: &str);

    fn bad_request(&self, sink: &mut dyn ResponseSink, message: &str);
}

/// Writes `{ success, message, data?, error? }` envelopes with status codes
/// taken from a [`StatusPolicy`].
#[derive(Debug, Clone, Default)]
pub struct EnvelopeFormatter {
    policy: StatusPolicy,
    expose_error_details: bool,
}

impl EnvelopeFormatter {
    pub fn new(policy: StatusPolicy, expose_error_details: bool) -> Self {
        Self {
            policy,
            expose_error_details,
        }
    }

    fn write_envelope<E: Serialize>(
        &self,
        sink: &mut dyn ResponseSink,
        status: StatusCode,
        message: &str,
        envelope: &E,
    ) {
        match serde_json::to_value(envelope) {
            Ok(body) => {
                log_outcome(status, message);
                sink.write(status, body);
            }
            Err(err) => {
                let status = self.policy.status_for(OutcomeKind::Error);
                tracing::error!(
                    error = %err,
                    response_message = message,
                    "failed to serialize response envelope"
                );
                sink.write(
                    status,
                    json!({
                        "success": false,
                        "message": "response serialization failed",
                        "error": { "code": ErrorCode::SerializationError.as_str() }
                    }),
                );
            }
        }
    }

    fn write_failure(&self, sink: &mut dyn ResponseSink, kind: OutcomeKind, message: &str) {
        let status = self.policy.status_for(kind);
        self.write_envelope(sink, status, message, &ApiError::simple(message));
    }
}

impl ResponseFormatter for EnvelopeFormatter {
    fn success<T: Serialize>(&self, sink: &mut dyn ResponseSink, data: Option<T>, message: &str) {
        let status = self.policy.status_for(OutcomeKind::Success);
        self.write_envelope(sink, status, message, &ApiSuccess::maybe(message, data));
    }

    fn handle_error(&self, sink: &mut dyn ResponseSink, error: &AppError, message: &str) {
        let status = self.policy.status_for(error.outcome_kind());

        if error.is_internal() {
            tracing::error!(error = ?error, "request failed");
        }

        let envelope = error.to_api_error(message, self.expose_error_details);
        self.write_envelope(sink, status, message, &envelope);
    }

    fn paginated<T: Serialize>(&self, sink: &mut dyn ResponseSink, page: Page<T>, message: &str) {
        let status = self.policy.status_for(OutcomeKind::Paginated);
        self.write_envelope(sink, status, message, &ApiSuccess::new(message, page));
    }

    fn unauthorized(&self, sink: &mut dyn ResponseSink, message: &str) {
        self.write_failure(sink, OutcomeKind::Unauthorized, message);
    }

    fn forbidden(&self, sink: &mut dyn ResponseSink, message: &str) {
        self.write_failure(sink, OutcomeKind::Forbidden, message);
    }

    fn not_found(&self, sink: &mut dyn ResponseSink, message: &str) {
        self.write_failure(sink, OutcomeKind::NotFound, message);
    }

    fn bad_request(&self, sink: &mut dyn ResponseSink, message: &str) {
        self.write_failure(sink, OutcomeKind::BadRequest, message);
    }
}

fn log_outcome(status: StatusCode, message: &str) {
    if status.is_server_error() {
        tracing::error!(
            status = status.as_u16(),
            response_message = message,
            "responding with server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            status = status.as_u16(),
            response_message = message,
            "responding with client error"
        );
    } else {
        tracing::debug!(
            status = status.as_u16(),
            response_message = message,
            "responding"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptors::sink::{MockResponseSink, ResponseSlot};
    use serde::ser::Error as _;
    use serde::Serializer;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn serialization_failure_still_writes_once() {
        let mut sink = MockResponseSink::new();
        sink.expect_write()
            .times(1)
            .withf(|status, body| {
                *status == StatusCode::INTERNAL_SERVER_ERROR
                    && body["error"]["code"] == "SERIALIZATION_ERROR"
            })
            .return_const(());

        EnvelopeFormatter::default().success(&mut sink, Some(Unserializable), "ok");
    }

    #[test]
    fn internal_errors_use_policy_error_status() {
        let policy = StatusPolicy::default().with(OutcomeKind::Error, StatusCode::BAD_GATEWAY);
        let formatter = EnvelopeFormatter::new(policy, false);
        let mut slot = ResponseSlot::new();

        formatter.handle_error(&mut slot, &AppError::Internal("db down".into()), "failed");

        assert_eq!(slot.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(slot.body().unwrap()["error"].get("details").is_none());
    }

    #[test]
    fn classified_errors_default_to_their_own_status() {
        let mut slot = ResponseSlot::new();

        EnvelopeFormatter::default().handle_error(
            &mut slot,
            &AppError::Conflict("name taken".into()),
            "operation failed",
        );

        assert_eq!(slot.status(), Some(StatusCode::CONFLICT));
        let body = slot.body().unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "CONFLICT");
        assert_eq!(body["error"]["details"]["reason"], "name taken");
    }

    #[test]
    fn classified_errors_follow_policy_overrides() {
        let policy = StatusPolicy::default()
            .with(OutcomeKind::BadRequest, StatusCode::UNPROCESSABLE_ENTITY)
            .with(OutcomeKind::Conflict, StatusCode::PRECONDITION_FAILED);
        let formatter = EnvelopeFormatter::new(policy, false);

        let validation = AppError::Validation {
            message: "page: page must be at least 1".into(),
            fields: json!({ "page": ["page must be at least 1"] }),
        };
        let cases = [
            (validation, StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::BadRequest("bad".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::Conflict("taken".into()), StatusCode::PRECONDITION_FAILED),
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
        ];

        for (error, expected) in cases {
            let mut slot = ResponseSlot::new();
            formatter.handle_error(&mut slot, &error, "operation failed");
            assert_eq!(slot.status(), Some(expected), "{error}");
        }
    }

    #[test]
    fn exposed_details_include_internal_reason() {
        let formatter = EnvelopeFormatter::new(StatusPolicy::default(), true);
        let mut slot = ResponseSlot::new();

        formatter.handle_error(&mut slot, &AppError::Internal("db down".into()), "failed");

        assert_eq!(slot.body().unwrap()["error"]["details"]["reason"], "db down");
    }

    #[test]
    fn failure_outcomes_honor_policy_overrides() {
        let policy = StatusPolicy::default().with(OutcomeKind::Unauthorized, StatusCode::FORBIDDEN);
        let formatter = EnvelopeFormatter::new(policy, false);
        let mut slot = ResponseSlot::new();

        formatter.unauthorized(&mut slot, "login first");

        assert_eq!(slot.status(), Some(StatusCode::FORBIDDEN));
        assert_eq!(slot.body().unwrap()["message"], "login first");
    }
}
