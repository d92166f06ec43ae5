//! Schema checks for incoming request bodies
//!
//! Bodies are checked against a declared field table before they are turned
//! into typed requests, so each problem is reported against the field that
//! caused it. The error body mirrors the `{"detail": [...]}` layout device
//! clients already understand.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::api::dto::CommandRequest;

/// One problem with one location in the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path to the offending value, starting at `"body"`
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn new(path: &[&str], kind: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: std::iter::once("body")
                .chain(path.iter().copied())
                .map(String::from)
                .collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

/// Rejected request body, rendered as HTTP 422
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("request validation failed with {} error(s)", .detail.len())]
pub struct ValidationError {
    pub detail: Vec<FieldError>,
}

impl ValidationError {
    fn single(error: FieldError) -> Self {
        Self {
            detail: vec![error],
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    String,
    Object,
}

impl FieldKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Object => value.is_object(),
        }
    }

    fn type_error(self) -> (&'static str, &'static str) {
        match self {
            FieldKind::String => ("string_type", "Input should be a valid string"),
            FieldKind::Object => ("dict_type", "Input should be a valid dictionary"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FieldRule {
    name: &'static str,
    aliases: &'static [&'static str],
    required: bool,
    kind: FieldKind,
    max_chars: Option<usize>,
}

impl FieldRule {
    fn check(&self, body: &Map<String, Value>) -> Option<FieldError> {
        let found = std::iter::once(self.name)
            .chain(self.aliases.iter().copied())
            .find_map(|key| body.get(key).map(|value| (key, value)));

        let (key, value) = match found {
            None => {
                return self
                    .required
                    .then(|| FieldError::new(&[self.name], "missing", "Field required"));
            }
            Some((_, Value::Null)) if !self.required => return None,
            Some(found) => found,
        };

        if !self.kind.accepts(value) {
            let (kind, msg) = self.kind.type_error();
            return Some(FieldError::new(&[key], kind, msg));
        }

        if let (Some(limit), Value::String(text)) = (self.max_chars, value) {
            if text.chars().count() > limit {
                return Some(FieldError::new(
                    &[key],
                    "string_too_long",
                    format!("String should have at most {limit} characters"),
                ));
            }
        }

        None
    }
}

fn command_request_schema(max_text_chars: Option<usize>) -> [FieldRule; 3] {
    [
        FieldRule {
            name: "text",
            aliases: &[],
            required: true,
            kind: FieldKind::String,
            max_chars: max_text_chars,
        },
        FieldRule {
            name: "deviceId",
            aliases: &["device_id"],
            required: false,
            kind: FieldKind::String,
            max_chars: None,
        },
        FieldRule {
            name: "context",
            aliases: &[],
            required: false,
            kind: FieldKind::Object,
            max_chars: None,
        },
    ]
}

/// Decode and validate a `POST /ai` body; `max_text_chars` of `None` means no cap
pub fn parse_command_request(
    body: &[u8],
    max_text_chars: Option<usize>,
) -> Result<CommandRequest, ValidationError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        ValidationError::single(FieldError::new(
            &[],
            "json_invalid",
            format!("JSON decode error: {e}"),
        ))
    })?;

    let Value::Object(fields) = &value else {
        return Err(ValidationError::single(FieldError::new(
            &[],
            "model_attributes_type",
            "Input should be a valid dictionary or object to extract fields from",
        )));
    };

    let detail: Vec<FieldError> = command_request_schema(max_text_chars)
        .iter()
        .filter_map(|rule| rule.check(fields))
        .collect();
    if !detail.is_empty() {
        return Err(ValidationError { detail });
    }

    // Leftover serde failures (e.g. both `deviceId` and `device_id`) are body level
    serde_json::from_value(value).map_err(|e| {
        ValidationError::single(FieldError::new(&[], "value_error", e.to_string()))
    })
}
