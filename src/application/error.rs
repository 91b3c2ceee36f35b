//! 客户端错误定义
//!
//! 客户端不在本地处理任何错误：传输失败、超时、非 2xx 响应原样返回给调用方。

use http::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// API 客户端错误
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// 请求超时
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// 网络错误（连接失败等）
    #[error("Network error: {0}")]
    Network(String),

    /// 非 2xx 响应
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// 响应体无法解析
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 请求被取消
    #[error("Request cancelled")]
    Cancelled,

    /// 请求无法构建
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// 创建状态码错误
    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// 非 2xx 响应的状态码
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }
}
