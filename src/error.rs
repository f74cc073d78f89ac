use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API-facing error. Every variant renders as `{"error": <message>}` with the
/// matching status; the real cause is logged at the site that mapped it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// `map_err` adapter: log the underlying failure, return the route's
    /// static message.
    pub fn internal<E: std::fmt::Display>(msg: &'static str) -> impl FnOnce(E) -> Self {
        move |e| {
            tracing::error!(error = %e, "{}", msg);
            ApiError::Internal(msg)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_variants() {
        let cases = [
            (ApiError::BadRequest("bad"), StatusCode::BAD_REQUEST),
            (ApiError::Unauthorized("no"), StatusCode::UNAUTHORIZED),
            (ApiError::NotFound("gone"), StatusCode::NOT_FOUND),
            (ApiError::Conflict("dup"), StatusCode::CONFLICT),
            (ApiError::Internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn message_is_the_display_impl() {
        assert_eq!(
            ApiError::Internal("Failed to fetch learning paths").to_string(),
            "Failed to fetch learning paths"
        );
    }
}
