//! Typed errors and HTTP mapping.

use crate::response::{build_envelope, Envelope};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown environment: '{0}'")]
    UnknownEnvironment(String),
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("datastore file not found: {0}")]
    MissingDatastore(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Outcome code the error is rendered with.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            AppError::Config(_) | AppError::Db(_) => 500,
        }
    }
}

/// Client-visible warning on 5xx responses; the detail only goes to the log.
pub const INTERNAL_ERROR_WARNING: &str = "The request could not be completed.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let envelope: Envelope<()> = match &self {
            AppError::NotFound(detail) => {
                tracing::debug!(error = %self, "request rejected");
                let mut envelope = Envelope::not_found();
                envelope.push_warning(&format!("not found: {}", detail));
                envelope
            }
            AppError::Config(_) | AppError::Db(_) => {
                tracing::error!(error = %self, "request failed");
                build_envelope(self.status_code(), Some(INTERNAL_ERROR_WARNING))
            }
        };
        envelope.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn db_error_renders_500_without_detail() {
        let res = AppError::Db(sqlx::Error::Protocol("secret/path/orb.db".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert_eq!(body["warnings"], serde_json::json!([INTERNAL_ERROR_WARNING]));
        assert!(!body.to_string().contains("secret/path"));
    }

    #[test]
    fn config_error_renders_500() {
        let err: AppError = ConfigError::UnknownEnvironment("PROD".into()).into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "unknown environment: 'PROD'");
    }

    #[tokio::test]
    async fn not_found_renders_404() {
        let res = AppError::NotFound("state 'XX'".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = body_json(res).await;
        assert_eq!(
            body["warnings"],
            serde_json::json!(["The requested resource no longer exists.", "not found: state 'XX'"])
        );
    }
}
