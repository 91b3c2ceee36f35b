//! HTTP Error Handling - 开发服务器

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const INTERNAL_ERROR: i32 = 500;
    pub const BAD_GATEWAY: i32 = 502;
    pub const GATEWAY_TIMEOUT: i32 = 504;
}

/// 开发服务器错误
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("No route matches {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Upstream unavailable: {0}")]
    BadGateway(String),

    #[error("Upstream timed out: {0}")]
    GatewayTimeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    fn status_and_errno(&self) -> (StatusCode, i32) {
        match self {
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, errno::NOT_FOUND),
            ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, errno::BAD_REQUEST),
            ServerError::BadGateway(_) => (StatusCode::BAD_GATEWAY, errno::BAD_GATEWAY),
            ServerError::GatewayTimeout(_) => {
                (StatusCode::GATEWAY_TIMEOUT, errno::GATEWAY_TIMEOUT)
            }
            ServerError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, errno::INTERNAL_ERROR)
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, errno) = self.status_and_errno();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(errno = errno, error = %message, "Dev server error");
        } else {
            tracing::warn!(errno = errno, error = %message, "Dev server request rejected");
        }

        (status, Json(ErrorResponse::new(errno, message))).into_response()
    }
}

impl From<reqwest::Error> for ServerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ServerError::GatewayTimeout(e.to_string())
        } else if e.is_builder() {
            ServerError::BadRequest(e.to_string())
        } else {
            ServerError::BadGateway(e.to_string())
        }
    }
}
