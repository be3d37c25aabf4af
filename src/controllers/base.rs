use serde::Serialize;

use crate::config::ResponseConfig;
use crate::interceptors::{AppError, EnvelopeFormatter, Page, ResponseFormatter, ResponseSink};

use super::messages::DefaultMessages;

/// Response helpers shared by every route handler.
///
/// Each `emit_*` call forwards to the formatter exactly once, substituting
/// the default message for its outcome when `message` is `None`. A message
/// that is passed in is used verbatim.
#[derive(Debug, Clone)]
pub struct Controller<F = EnvelopeFormatter> {
    formatter: F,
    messages: DefaultMessages,
}

impl Controller<EnvelopeFormatter> {
    pub fn from_config(config: &ResponseConfig) -> Self {
        Self::new(
            EnvelopeFormatter::new(config.status_policy.clone(), config.expose_error_details),
            DefaultMessages::for_locale(config.locale),
        )
    }
}

impl Default for Controller<EnvelopeFormatter> {
    fn default() -> Self {
        Self::new(EnvelopeFormatter::default(), DefaultMessages::default())
    }
}

impl<F: ResponseFormatter> Controller<F> {
    pub fn new(formatter: F, messages: DefaultMessages) -> Self {
        Self {
            formatter,
            messages,
        }
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn emit_error<E: Into<AppError>>(
        &self,
        sink: &mut dyn ResponseSink,
        error: E,
        message: Option<&str>,
    ) {
        let error = error.into();
        let message = message.unwrap_or(&*self.messages.error);
        self.formatter.handle_error(sink, &error, message);
    }

    pub fn emit_success<T: Serialize>(
        &self,
        sink: &mut dyn ResponseSink,
        data: Option<T>,
        message: Option<&str>,
    ) {
        let message = message.unwrap_or(&*self.messages.success);
        self.formatter.success(sink, data, message);
    }

    pub fn emit_paginated<T: Serialize>(
        &self,
        sink: &mut dyn ResponseSink,
        items: Vec<T>,
        total: u64,
        page: u32,
        page_size: u32,
        message: Option<&str>,
    ) {
        let message = message.unwrap_or(&*self.messages.paginated);
        self.formatter
            .paginated(sink, Page::new(items, total, page, page_size), message);
    }

    pub fn emit_unauthorized(&self, sink: &mut dyn ResponseSink, message: Option<&str>) {
        let message = message.unwrap_or(&*self.messages.unauthorized);
        self.formatter.unauthorized(sink, message);
    }

    pub fn emit_forbidden(&self, sink: &mut dyn ResponseSink, message: Option<&str>) {
        let message = message.unwrap_or(&*self.messages.forbidden);
        self.formatter.forbidden(sink, message);
    }

    pub fn emit_not_found(&self, sink: &mut dyn ResponseSink, message: Option<&str>) {
        let message = message.unwrap_or(&*self.messages.not_found);
        self.formatter.not_found(sink, message);
    }

    pub fn emit_bad_request(&self, sink: &mut dyn ResponseSink, message: Option<&str>) {
        let message = message.unwrap_or(&*self.messages.bad_request);
        self.formatter.bad_request(sink, message);
    }
}
