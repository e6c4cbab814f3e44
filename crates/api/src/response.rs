//! Success envelope shared by every API handler.
//!
//! Successful responses carry `"result": "OK"` next to their payload
//! fields, e.g. `{ "result": "OK", "project": { ... } }`. Use
//! [`OkResponse`] rather than ad-hoc `json!` so the shape stays consistent.

use plotline_core::messages::OK;
use serde::Serialize;

/// `{ "result": "OK", ...payload }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(OkResponse::new(ProjectPayload { project })))
/// ```
#[derive(Debug, Serialize)]
pub struct OkResponse<T: Serialize> {
    pub result: &'static str,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload for responses that carry nothing besides `result`.
#[derive(Debug, Serialize)]
pub struct Empty {}

impl<T: Serialize> OkResponse<T> {
    pub fn new(payload: T) -> Self {
        Self {
            result: OK,
            payload,
        }
    }
}

impl OkResponse<Empty> {
    pub fn empty() -> Self {
        Self::new(Empty {})
    }
}
