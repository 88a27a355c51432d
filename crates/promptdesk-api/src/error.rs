//! Mapping of service failures onto HTTP responses.
//!
//! Every error body is `{"error": "<message>"}`. 401 responses also carry
//! `WWW-Authenticate: Bearer`.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use promptdesk_core::error::{AccessError, AuthError, RetrievalError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            ApiError::Access(AccessError::Unauthenticated) => StatusCode::UNAUTHORIZED,
            ApiError::Access(AccessError::Forbidden { .. }) => StatusCode::FORBIDDEN,
            ApiError::Retrieval(RetrievalError::InvalidTenant) => StatusCode::BAD_REQUEST,
            ApiError::Retrieval(RetrievalError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Retrieval(RetrievalError::DeadlineExceeded) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Auth(AuthError::Internal(_))
            | ApiError::Access(AccessError::Internal(_))
            | ApiError::Retrieval(RetrievalError::Internal(_))
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn internal_cause(&self) -> Option<&str> {
        match self {
            ApiError::Auth(AuthError::Internal(cause))
            | ApiError::Access(AccessError::Internal(cause))
            | ApiError::Retrieval(RetrievalError::Internal(cause))
            | ApiError::Internal(cause) => Some(cause),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.internal_cause() {
            Some(cause) => error!("Request failed: {}", cause),
            None if status.is_server_error() => error!("Request failed: {}", self),
            None => warn!("Request rejected ({}): {}", status.as_u16(), self),
        }

        let mut response = (status, Json(ErrorBody { error: self.to_string() })).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptdesk_core::domain::Role;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(AuthError::InvalidCredentials), StatusCode::UNAUTHORIZED),
            (ApiError::from(AccessError::Unauthenticated), StatusCode::UNAUTHORIZED),
            (
                ApiError::from(AccessError::Forbidden { required: Role::User }),
                StatusCode::FORBIDDEN,
            ),
            (ApiError::from(RetrievalError::InvalidTenant), StatusCode::BAD_REQUEST),
            (ApiError::from(RetrievalError::NotFound), StatusCode::NOT_FOUND),
            (ApiError::from(RetrievalError::DeadlineExceeded), StatusCode::GATEWAY_TIMEOUT),
            (ApiError::Validation("limit".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (
                ApiError::from(RetrievalError::Internal("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{:?}", err);
        }
    }

    #[test]
    fn test_unauthorized_carries_challenge() {
        let response = ApiError::from(AccessError::Unauthenticated).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");

        let response = ApiError::from(AccessError::Forbidden { required: Role::User }).into_response();
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = ApiError::from(AuthError::Internal("password=hunter2".into()));
        assert_eq!(err.to_string(), "Internal server error");
    }
}
