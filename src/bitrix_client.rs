use crate::errors::AppError;
use crate::models::{Lead, LeadEnvelope};
use serde_json::json;
use std::time::Duration;

/// Client for the Bitrix24 REST API.
///
/// All calls go through an inbound-webhook-style base URL that embeds the
/// access token in its path, so the URL itself must never appear in error
/// messages or logs.
#[derive(Clone)]
pub struct BitrixClient {
    client: reqwest::Client,
    base_url: String,
    notify_user_id: String,
}

impl BitrixClient {
    /// Creates a new `BitrixClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - REST base URL with trailing slash, token embedded.
    /// * `notify_user_id` - Fixed recipient of system notifications.
    pub fn new(base_url: String, notify_user_id: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create Bitrix client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            notify_user_id,
        })
    }

    /// Fetches a lead by id via `crm.lead.get`.
    ///
    /// Returns `Ok(None)` when the CRM answers with a non-success status:
    /// Bitrix replies 400 for ids it does not know, which is "no such
    /// lead", not a transport fault. Transport and decode failures are
    /// returned as errors so the caller decides what to do with them.
    pub async fn get_lead(&self, lead_id: &str) -> Result<Option<Lead>, AppError> {
        let url = format!("{}crm.lead.get", self.base_url);
        tracing::info!("Fetching lead {} from Bitrix", lead_id);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "id": lead_id }))
            .send()
            .await
            .map_err(|e| AppError::BitrixApi(format!("crm.lead.get request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("crm.lead.get returned {} for lead {}", status, lead_id);
            return Ok(None);
        }

        let envelope: LeadEnvelope = response.json().await.map_err(|e| {
            AppError::BitrixApi(format!("Failed to parse crm.lead.get response: {}", e))
        })?;

        Ok(Some(envelope.result))
    }

    /// Posts an internal system notification via `im.notify.system.add`.
    ///
    /// The recipient is the fixed user this relay was configured with.
    pub async fn notify(&self, message: &str) -> Result<(), AppError> {
        let url = format!("{}im.notify.system.add", self.base_url);
        tracing::info!("Sending system notification to user {}", self.notify_user_id);

        let body = json!({
            "USER_ID": self.notify_user_id,
            "message": message
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::BitrixApi(format!("im.notify.system.add request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::BitrixApi(format!(
                "im.notify.system.add returned {}",
                status
            )));
        }

        tracing::info!("Notification delivered to user {}", self.notify_user_id);
        Ok(())
    }
}
