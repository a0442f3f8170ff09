use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use mr_events::{Dispatch, MergeRequestEvent, dispatch};
use tracing::{debug, instrument, warn};

use crate::{
    core::{app_state::AppState, http::response_envelope::StatusBody},
    error_handler::AppResult,
};

/// POST /gitlab/mr
///
/// Receives a GitLab merge-request webhook and relays it to the chat bot.
///
/// - `400 {"error": ...}` when the body is not a merge-request event
/// - `500 {"error": ...}` when the bot could not be reached or refused the message
/// - `200 {"status": "ok"}` otherwise, including actions that are not announced
#[instrument(name = "gitlab_mr_route", skip_all)]
pub async fn gitlab_mr_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MergeRequestEvent>, JsonRejection>,
) -> AppResult<Json<StatusBody>> {
    let Json(event) = payload.inspect_err(|e| warn!(error = %e, "rejecting malformed webhook body"))?;

    if event.object_kind != "merge_request" {
        debug!(object_kind = %event.object_kind, "unexpected object kind, classifying anyway");
    }

    match dispatch(&event, &state.notifier).await {
        Ok(Dispatch::Sent(action)) => debug!(%action, "relayed"),
        Ok(Dispatch::Ignored(action)) => debug!(%action, "ignored"),
        Err(e) => {
            warn!(error = %e, "failed to relay merge request event");
            return Err(e.into());
        }
    }

    Ok(Json(StatusBody::ok()))
}
