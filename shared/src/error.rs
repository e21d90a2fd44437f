use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Response};

use crate::cors::cors_response;

/// Failures the endpoint reports to the caller as structured JSON.
/// Anything else escaping the handler is caught at the outermost boundary
/// and rendered as a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    BadRequest(String),
    #[error("Failed to set user role: {0}")]
    Datastore(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Datastore(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render as the endpoint's JSON error body with cross-origin headers.
    pub fn into_response(self) -> Result<Response<Body>, Error> {
        let resp = cors_response(self.status())
            .header("Content-Type", "application/json")
            .body(
                serde_json::json!({ "error": self.to_string() })
                    .to_string()
                    .into(),
            )
            .map_err(Box::new)?;
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datastore_error_prefixes_message() {
        let err = ApiError::Datastore("connection refused".to_string());
        assert_eq!(err.to_string(), "Failed to set user role: connection refused");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_is_structured_json_with_cors() {
        let resp = ApiError::MethodNotAllowed.into_response().unwrap();
        assert_eq!(resp.status(), 405);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        let body: serde_json::Value = serde_json::from_slice(&resp.body().to_vec()).unwrap();
        assert_eq!(body["error"], "Method not allowed");
    }
}
