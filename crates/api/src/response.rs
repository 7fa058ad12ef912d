//! Success envelope shared by every API handler.
//!
//! Responses look like `{ "code": 200, "message": "successfully", "data": ... }`.
//! Acknowledgements (create, delete, logout) leave `data` out entirely.

use serde::Serialize;

const SUCCESS_MESSAGE: &str = "successfully";

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload.
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            message: SUCCESS_MESSAGE,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope without a payload.
    pub fn ack() -> Self {
        Self {
            code: 200,
            message: SUCCESS_MESSAGE,
            data: None,
        }
    }
}
