use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-200 status from the provider. Carries the raw response text.
    #[error("API request failed")]
    UpstreamFailure(String),

    /// 200 from the provider but no recognizable image reference in the body.
    #[error("No image returned from API")]
    NoImageExtracted(Value),
}

impl RelayError {
    fn details(&self) -> Value {
        match self {
            RelayError::UpstreamFailure(text) => Value::String(text.clone()),
            RelayError::NoImageExtracted(body) => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

impl actix_web::ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::UpstreamFailure(_) | RelayError::NoImageExtracted(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string(),
            "details": self.details(),
        }))
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_upstream_failure_is_bad_gateway() {
        let err = RelayError::UpstreamFailure("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "API request failed");
        assert_eq!(err.details(), Value::String("boom".to_string()));
    }

    #[test]
    fn test_no_image_is_bad_gateway_with_body_details() {
        let body = json!({"unexpected": true});
        let err = RelayError::NoImageExtracted(body.clone());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "No image returned from API");
        assert_eq!(err.details(), body);
    }

    #[test]
    fn test_config_error_is_internal() {
        let err = RelayError::Config("missing port".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
