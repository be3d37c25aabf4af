use axum::http::StatusCode;

/// The semantic outcome a handler reports through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Success,
    Paginated,
    Error,
    Unauthorized,
    Forbidden,
    NotFound,
    BadRequest,
    Conflict,
}

impl OutcomeKind {
    pub const ALL: [OutcomeKind; 8] = [
        OutcomeKind::Success,
        OutcomeKind::Paginated,
        OutcomeKind::Error,
        OutcomeKind::Unauthorized,
        OutcomeKind::Forbidden,
        OutcomeKind::NotFound,
        OutcomeKind::BadRequest,
        OutcomeKind::Conflict,
    ];

    /// Suffix used for `RESPONSE_STATUS_<KIND>` overrides.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Success => "SUCCESS",
            OutcomeKind::Paginated => "PAGINATED",
            OutcomeKind::Error => "ERROR",
            OutcomeKind::Unauthorized => "UNAUTHORIZED",
            OutcomeKind::Forbidden => "FORBIDDEN",
            OutcomeKind::NotFound => "NOT_FOUND",
            OutcomeKind::BadRequest => "BAD_REQUEST",
            OutcomeKind::Conflict => "CONFLICT",
        }
    }
}

/// Status code written for each outcome kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPolicy {
    success: StatusCode,
    paginated: StatusCode,
    error: StatusCode,
    unauthorized: StatusCode,
    forbidden: StatusCode,
    not_found: StatusCode,
    bad_request: StatusCode,
    conflict: StatusCode,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            success: StatusCode::OK,
            paginated: StatusCode::OK,
            error: StatusCode::INTERNAL_SERVER_ERROR,
            unauthorized: StatusCode::UNAUTHORIZED,
            forbidden: StatusCode::FORBIDDEN,
            not_found: StatusCode::NOT_FOUND,
            bad_request: StatusCode::BAD_REQUEST,
            conflict: StatusCode::CONFLICT,
        }
    }
}

impl StatusPolicy {
    pub fn status_for(&self, kind: OutcomeKind) -> StatusCode {
        match kind {
            OutcomeKind::Success => self.success,
            OutcomeKind::Paginated => self.paginated,
            OutcomeKind::Error => self.error,
            OutcomeKind::Unauthorized => self.unauthorized,
            OutcomeKind::Forbidden => self.forbidden,
            OutcomeKind::NotFound => self.not_found,
            OutcomeKind::BadRequest => self.bad_request,
            OutcomeKind::Conflict => self.conflict,
        }
    }

    /// Override the status for one outcome kind.
    pub fn with(mut self, kind: OutcomeKind, status: StatusCode) -> Self {
        let slot = match kind {
            OutcomeKind::Success => &mut self.success,
            OutcomeKind::Paginated => &mut self.paginated,
            OutcomeKind::Error => &mut self.error,
            OutcomeKind::Unauthorized => &mut self.unauthorized,
            OutcomeKind::Forbidden => &mut self.forbidden,
            OutcomeKind::NotFound => &mut self.not_found,
            OutcomeKind::BadRequest => &mut self.bad_request,
            OutcomeKind::Conflict => &mut self.conflict,
        };
        *slot = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_http_conventions() {
        let policy = StatusPolicy::default();

        assert_eq!(policy.status_for(OutcomeKind::Success), StatusCode::OK);
        assert_eq!(policy.status_for(OutcomeKind::Paginated), StatusCode::OK);
        assert_eq!(policy.status_for(OutcomeKind::Error), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(policy.status_for(OutcomeKind::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(policy.status_for(OutcomeKind::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(policy.status_for(OutcomeKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(policy.status_for(OutcomeKind::BadRequest), StatusCode::BAD_REQUEST);
        assert_eq!(policy.status_for(OutcomeKind::Conflict), StatusCode::CONFLICT);
    }

    #[test]
    fn override_touches_only_one_kind() {
        let policy = StatusPolicy::default().with(OutcomeKind::NotFound, StatusCode::GONE);

        assert_eq!(policy.status_for(OutcomeKind::NotFound), StatusCode::GONE);
        for kind in OutcomeKind::ALL.into_iter().filter(|k| *k != OutcomeKind::NotFound) {
            assert_eq!(policy.status_for(kind), StatusPolicy::default().status_for(kind));
        }
    }
}
