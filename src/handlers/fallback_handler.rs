use axum::extract::State;

use crate::config::AppState;
use crate::interceptors::ResponseSlot;

/// Unknown routes answer with the standard not-found envelope.
pub async fn route_not_found(State(state): State<AppState>) -> ResponseSlot {
    let mut slot = ResponseSlot::new();
    state.controller.emit_not_found(&mut slot, None);
    slot
}
