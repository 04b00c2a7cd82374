use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Request, State as AxumState},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use super::error::RelayError;
use super::state::State;
use super::validation::{validate, ContactRequest};
use crate::constants::{MSG_RECEIVED, MSG_SENT, SUBMISSION_ID_PREFIX};
use crate::entities::contact_submission;
use crate::repositories::{DeliveryUpdate, SubmissionRepository};

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SubmissionsResponse {
    pub success: bool,
    pub count: usize,
    pub submissions: Vec<contact_submission::Model>,
}

/// `contact_<unix millis>_<9 lowercase alphanumerics>`
pub fn new_submission_id() -> String {
    let suffix: String = uuid::Uuid::new_v4().simple().to_string().chars().take(9).collect();
    format!("{}{}_{}", SUBMISSION_ID_PREFIX, Utc::now().timestamp_millis(), suffix)
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Reject requests whose bearer token does not match the configured key
pub async fn require_bearer(
    AxumState(state): AxumState<Arc<State>>,
    request: Request,
    next: Next,
) -> Result<Response, RelayError> {
    if state.anon_key.is_empty() {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if token == state.anon_key => Ok(next.run(request).await),
        _ => Err(RelayError::Unauthorized),
    }
}

/// Store the submission, then best-effort notify. A failed notification is
/// still a success for the submitter.
pub async fn contact_handler(
    AxumState(state): AxumState<Arc<State>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, RelayError> {
    let Json(request) = payload.map_err(|e| RelayError::MalformedPayload(e.body_text()))?;
    let contact = validate(request)?;

    let id = new_submission_id();
    let conn = state.storage.connection();
    SubmissionRepository::insert(conn, &id, &contact.name, &contact.email, &contact.message, Utc::now())
        .await
        .map_err(RelayError::Storage)?;
    log::info!("Relay: stored submission {} from {}", id, contact.email);

    let update = state.notifier.notify(&contact, Utc::now()).await;
    let message = match &update {
        DeliveryUpdate::Sent { .. } => MSG_SENT,
        DeliveryUpdate::Failed { .. } => {
            log::warn!("Relay: email delivery failed but submission {} is saved", id);
            MSG_RECEIVED
        }
        DeliveryUpdate::Disabled { .. } => MSG_RECEIVED,
    };

    if let Err(e) = SubmissionRepository::update_delivery(conn, &id, update, Utc::now()).await {
        log::error!("Relay: failed to record delivery status for {}: {:#}", id, e);
    }

    Ok(Json(ContactResponse {
        success: true,
        message: message.to_string(),
    }))
}

pub async fn submissions_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<Json<SubmissionsResponse>, RelayError> {
    let submissions = SubmissionRepository::get_all_newest_first(state.storage.connection())
        .await
        .map_err(RelayError::Retrieval)?;

    Ok(Json(SubmissionsResponse {
        success: true,
        count: submissions.len(),
        submissions,
    }))
}
