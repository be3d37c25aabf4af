use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap},
};
use serde_json::json;

use crate::config::AppState;
use crate::dto::PageQuery;
use crate::interceptors::ResponseSlot;
use crate::utils::validate_request;

const ROLE_HEADER: &str = "x-user-role";

/// List catalog items one page at a time
pub async fn list_catalog(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ResponseSlot {
    let mut slot = ResponseSlot::new();
    let controller = &state.controller;

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            controller.emit_bad_request(&mut slot, Some(rejection.body_text().as_str()));
            return slot;
        }
    };

    if let Err(err) = validate_request(&query) {
        controller.emit_error(&mut slot, err, Some("invalid pagination parameters"));
        return slot;
    }

    let items = state
        .catalog
        .slice(query.offset(), query.page_size() as usize);

    controller.emit_paginated(
        &mut slot,
        items,
        state.catalog.len() as u64,
        query.page(),
        query.page_size(),
        None,
    );
    slot
}

/// Fetch a single catalog item by id
pub async fn get_catalog_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ResponseSlot {
    let mut slot = ResponseSlot::new();
    let controller = &state.controller;

    let Ok(Path(id)) = id else {
        controller.emit_bad_request(&mut slot, Some("catalog id must be a positive integer"));
        return slot;
    };

    match state.catalog.get(id) {
        Some(item) => controller.emit_success(&mut slot, Some(item), None),
        None => {
            tracing::debug!(id, "catalog item not found");
            controller.emit_not_found(&mut slot, None);
        }
    }
    slot
}

/// Per-category counts, restricted to admins.
///
/// The header checks stand in for a real auth layer: no `Authorization`
/// header is a 401, any role other than `admin` is a 403.
pub async fn catalog_stats(State(state): State<AppState>, headers: HeaderMap) -> ResponseSlot {
    let mut slot = ResponseSlot::new();
    let controller = &state.controller;

    if !headers.contains_key(header::AUTHORIZATION) {
        controller.emit_unauthorized(&mut slot, None);
        return slot;
    }

    let role = headers.get(ROLE_HEADER).and_then(|value| value.to_str().ok());
    if role != Some("admin") {
        controller.emit_forbidden(&mut slot, None);
        return slot;
    }

    let stats = json!({
        "total": state.catalog.len(),
        "categories": state.catalog.count_by_category(),
    });
    controller.emit_success(&mut slot, Some(stats), Some("catalog statistics"));
    slot
}
