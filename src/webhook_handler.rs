use crate::errors::AppError;
use crate::handlers::AppState;
use crate::notification::format_lead_notification;
use crate::webhook_models::{WebhookAck, WebhookEnvelope, WebhookEvent};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

/// Bitrix webhook handler.
///
/// Receives lifecycle events from Bitrix24. On a lead-created or
/// lead-updated event it fetches the lead, formats a summary and posts it
/// back into Bitrix as a system notification. Any other event is
/// acknowledged and ignored; Bitrix sends many event kinds to a registered
/// handler and an unrecognized tag is expected traffic, not an error.
///
/// No idempotency: replaying the same event sends a second notification.
pub async fn bitrix_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<WebhookAck>), AppError> {
    // Raw request dump for diagnostic replay
    tracing::debug!(
        "Received Bitrix webhook: headers={:?} body={:?}",
        headers,
        String::from_utf8_lossy(&body)
    );

    let envelope = parse_envelope(&headers, &body)?;
    tracing::info!("Webhook event: {}", envelope.event.tag());

    match &envelope.event {
        WebhookEvent::LeadCreated | WebhookEvent::LeadUpdated => {
            let lead_id = envelope.lead_id.as_deref().ok_or_else(|| {
                AppError::MalformedPayload("lead event without data[FIELDS][ID]".to_string())
            })?;

            let lead = state
                .bitrix
                .get_lead(lead_id)
                .await?
                .ok_or_else(|| AppError::LeadNotFound(format!("lead {} not found", lead_id)))?;
            tracing::info!("Fetched lead {}", lead_id);

            let message = format_lead_notification(&lead);
            state.bitrix.notify(&message).await?;
            tracing::info!("Notification sent for lead {}", lead_id);

            Ok((StatusCode::OK, Json(WebhookAck::success("success"))))
        }
        WebhookEvent::Unknown(tag) => {
            tracing::warn!("Ignoring unrecognized event: {:?}", tag);
            Ok((StatusCode::OK, Json(WebhookAck::ignored(tag.clone()))))
        }
    }
}

/// Picks the body decoder from the content type: JSON when declared,
/// form-encoded otherwise (Bitrix's default outbound encoding).
fn parse_envelope(headers: &HeaderMap, body: &Bytes) -> Result<WebhookEnvelope, AppError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);

    if is_json {
        WebhookEnvelope::from_json(body)
    } else {
        WebhookEnvelope::from_form(body)
    }
}
