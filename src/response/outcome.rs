//! Outcome table: numeric code to envelope status, message and pre-seeded warning.
//!
//! Lookup by code is first-match over [`OUTCOMES`]. Codes that share a number
//! (the three 302 entries) are told apart by name.

use serde::Serialize;

const RESOURCE_GONE: &str = "The requested resource no longer exists.";

/// Status text carried in every envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EnvelopeStatus {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "redirect")]
    Redirect,
    #[serde(rename = "failure")]
    Failure,
    #[serde(rename = "Other HTTP Response")]
    Other,
}

/// One row of the outcome table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub code: u16,
    /// Stable identifier, unique across the table.
    pub name: &'static str,
    pub status: EnvelopeStatus,
    pub message: &'static str,
    pub warning: Option<&'static str>,
}

const fn success(code: u16, name: &'static str, message: &'static str) -> Outcome {
    Outcome { code, name, status: EnvelopeStatus::Success, message, warning: None }
}

const fn redirect(code: u16, name: &'static str, message: &'static str) -> Outcome {
    Outcome { code, name, status: EnvelopeStatus::Redirect, message, warning: None }
}

const fn failure(code: u16, name: &'static str, message: &'static str) -> Outcome {
    Outcome { code, name, status: EnvelopeStatus::Failure, message, warning: None }
}

const fn failure_warn(
    code: u16,
    name: &'static str,
    message: &'static str,
    warning: &'static str,
) -> Outcome {
    Outcome { code, name, status: EnvelopeStatus::Failure, message, warning: Some(warning) }
}

/// Sentinel code for anything not in [`OUTCOMES`].
pub const OTHER_STATUS_CODE: u16 = 599;

pub const OUTCOMES: &[Outcome] = &[
    success(200, "OK", "OK"),
    success(201, "Created", "Created"),
    success(202, "Accepted", "Accepted"),
    success(203, "NonAuthoritativeInformation", "Non-Authoritative Information"),
    success(204, "NoContent", "No Content"),
    success(205, "ResetContent", "Reset Content"),
    redirect(300, "Ambiguous", "Ambiguous"),
    redirect(301, "MovedPermanently", "Moved Permanently"),
    redirect(302, "Found", "Found"),
    redirect(302, "Redirect", "Redirect"),
    redirect(302, "RedirectMethod", "Redirect Method"),
    redirect(303, "SeeOther", "See Other"),
    redirect(304, "NotModified", "Not Modified"),
    redirect(307, "TemporaryRedirect", "Temporary Redirect"),
    redirect(308, "PermanentRedirect", "Permanent Redirect"),
    failure(400, "BadRequest", "Bad Request"),
    failure(401, "Unauthorized", "Unauthorized"),
    failure(402, "PaymentRequired", "Payment Required"),
    failure(403, "Forbidden", "Forbidden"),
    failure_warn(404, "NotFound", "Not Found", RESOURCE_GONE),
    failure(405, "MethodNotAllowed", "Method Not Allowed"),
    // 406 and 408 used to seed "The requested resource no longer exists." and
    // "The The request has timed out."; neither belongs to those codes.
    failure(406, "NotAcceptable", "Not Acceptable"),
    failure(408, "RequestTimeout", "Request Timeout"),
    failure_warn(409, "Conflict", "Conflict", "A conflict exists."),
    failure_warn(410, "Gone", "Gone", RESOURCE_GONE),
    failure(411, "LengthRequired", "Length Required"),
    failure(412, "PreconditionFailed", "Precondition Failed"),
    failure(413, "RequestEntityTooLarge", "Request Entity Too Large"),
    failure(414, "RequestUriTooLong", "Request Uri Too Long"),
    failure(415, "UnsupportedMediaType", "Unsupported Media Type"),
    failure(416, "RequestedRangeNotSatisfiable", "Requested Range Not Satisfiable"),
    failure(417, "ExpectationFailed", "Expectation Failed"),
    failure(426, "UpgradeRequired", "Upgrade Required"),
    failure(429, "TooManyRequests", "Too Many Requests"),
    failure(500, "InternalServerError", "Internal Server Error"),
    failure(501, "NotImplemented", "Not Implemented"),
    failure(502, "BadGateway", "Bad Gateway"),
    failure(503, "ServiceUnavailable", "Service Unavailable"),
    failure(504, "GatewayTimeout", "Gateway Timeout"),
    failure(505, "HttpVersionNotSupported", "HTTP Version Not Supported"),
];

impl Outcome {
    /// First table row for `code`, or None when the code is unlisted.
    pub fn lookup(code: u16) -> Option<&'static Outcome> {
        OUTCOMES.iter().find(|o| o.code == code)
    }

    pub fn by_name(name: &str) -> Option<&'static Outcome> {
        OUTCOMES.iter().find(|o| o.name == name)
    }
}
