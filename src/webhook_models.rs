use crate::errors::AppError;
use serde::Serialize;
use serde_json::Value;

/// Event tag of an inbound Bitrix webhook.
///
/// Bitrix sends many event kinds to a registered handler; only the lead
/// lifecycle events are acted on, everything else falls through to
/// `Unknown` and is acknowledged without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEvent {
    LeadCreated,
    LeadUpdated,
    Unknown(String),
}

impl WebhookEvent {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ONCRMLEADADD" => WebhookEvent::LeadCreated,
            "ONCRMLEADUPDATE" => WebhookEvent::LeadUpdated,
            other => WebhookEvent::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            WebhookEvent::LeadCreated => "ONCRMLEADADD",
            WebhookEvent::LeadUpdated => "ONCRMLEADUPDATE",
            WebhookEvent::Unknown(tag) => tag,
        }
    }
}

/// Parsed inbound webhook body.
///
/// Bitrix delivers either JSON or form-encoded payloads depending on the
/// integration settings; both carry an `event` tag and, for lead events,
/// the lead id nested under `data.FIELDS.ID` (JSON) or the flat key
/// `data[FIELDS][ID]` (form encoding).
#[derive(Debug, Clone)]
pub struct WebhookEnvelope {
    pub event: WebhookEvent,
    pub lead_id: Option<String>,
}

impl WebhookEnvelope {
    /// Parses a JSON webhook body. A missing `event` key defaults to the
    /// empty tag, which dispatches as an unknown event.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        let data: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::MalformedPayload(format!("invalid JSON body: {}", e)))?;

        let event = data
            .get("event")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let lead_id = data
            .pointer("/data/FIELDS/ID")
            .and_then(value_as_id_string);

        Ok(Self {
            event: WebhookEvent::from_tag(event),
            lead_id,
        })
    }

    /// Parses a form-encoded webhook body, Bitrix's default outbound
    /// encoding. Keys use PHP-style brackets for nesting.
    pub fn from_form(body: &[u8]) -> Result<Self, AppError> {
        let mut event = String::new();
        let mut lead_id = None;

        for (key, value) in url::form_urlencoded::parse(body) {
            match key.as_ref() {
                "event" => event = value.into_owned(),
                "data[FIELDS][ID]" => lead_id = Some(value.into_owned()),
                _ => {}
            }
        }

        Ok(Self {
            event: WebhookEvent::from_tag(&event),
            lead_id,
        })
    }
}

/// Bitrix serializes ids as strings in form payloads but may use numbers
/// in JSON ones; accept both.
fn value_as_id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// JSON acknowledgment returned to the webhook sender.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

impl WebhookAck {
    pub fn success(send_message: impl Into<String>) -> Self {
        Self {
            status: "success",
            send_message: Some(send_message.into()),
            event: None,
        }
    }

    pub fn ignored(event: impl Into<String>) -> Self {
        Self {
            status: "ignored",
            send_message: None,
            event: Some(event.into()),
        }
    }
}
