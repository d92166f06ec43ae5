//! Request and response bodies of the HTTP interface

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::command::{Action, IntentResolution};
use crate::core::types::{utc_timestamp, RequestId};

/// Body of `POST /ai`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    /// Free-text command typed on the device
    pub text: String,
    /// Sender identity; the firmware sends `device_id`
    #[serde(default, alias = "device_id", skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Accepted for forward compatibility, not read by the resolver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

/// Body returned by `POST /ai`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiResponse {
    pub request_id: RequestId,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    pub reply: String,
    pub actions: Vec<Action>,
}

impl AiResponse {
    /// Stamp a resolution with a fresh id and the current time
    pub fn from_resolution(resolution: IntentResolution, device_id: Option<String>) -> Self {
        let (reply, actions) = resolution.into_parts();
        Self {
            request_id: RequestId::new(),
            timestamp: utc_timestamp(),
            device_id,
            reply,
            actions,
        }
    }
}

/// Body returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: utc_timestamp(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
