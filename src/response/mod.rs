//! Standard response envelope: every endpoint body has this shape.

mod outcome;

pub use outcome::{EnvelopeStatus, Outcome, OTHER_STATUS_CODE, OUTCOMES};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub message: Option<&'static str>,
    pub execution_time_utc: DateTime<Utc>,
    pub warnings: Vec<String>,
    pub status_code: u16,
    /// Left empty by every constructor; callers attach the payload.
    pub data: Option<T>,
}

/// Envelope for `code`. Unlisted codes give the 599 sentinel; this never fails.
/// `warning` is appended after any pre-seeded warning when non-empty. The
/// sentinel carries no warnings at all.
pub fn build_envelope<T>(code: u16, warning: Option<&str>) -> Envelope<T> {
    let Some(outcome) = Outcome::lookup(code) else {
        return Envelope::other();
    };
    let mut envelope = Envelope::from_outcome(outcome);
    if let Some(w) = warning {
        envelope.push_warning(w);
    }
    envelope
}

impl<T> Envelope<T> {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        Self {
            status: outcome.status,
            message: Some(outcome.message),
            execution_time_utc: Utc::now(),
            warnings: outcome.warning.map(String::from).into_iter().collect(),
            status_code: outcome.code,
            data: None,
        }
    }

    fn other() -> Self {
        Self {
            status: EnvelopeStatus::Other,
            message: None,
            execution_time_utc: Utc::now(),
            warnings: Vec::new(),
            status_code: OTHER_STATUS_CODE,
            data: None,
        }
    }

    /// 200 envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        build_envelope(200, None).with_data(data)
    }

    pub fn not_found() -> Self {
        build_envelope(404, None)
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn push_warning(&mut self, warning: &str) {
        if !warning.is_empty() {
            self.warnings.push(warning.to_string());
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
