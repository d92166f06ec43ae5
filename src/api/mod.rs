//! HTTP interface for devices
//!
//! `GET /health` and `POST /ai`. The handler validates the body, runs the
//! resolver and stamps the result; all command logic lives in `crate::command`.

pub mod dto;
pub mod routes;
pub mod validation;

pub use dto::{AiResponse, CommandRequest, HealthResponse};
pub use routes::{router, serve};
pub use validation::{parse_command_request, FieldError, ValidationError};
