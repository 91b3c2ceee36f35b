//! HTTP Transport Port - 请求发送抽象
//!
//! 定义 API 客户端发出请求的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::application::error::ClientError;
use crate::domain::Fields;

/// 一次 API 请求
///
/// `path` 相对于 base path（如 `/subscriptions/42`），由传输层拼接完整 URL。
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// 设置 JSON 请求体
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// 以字段映射作为请求体
    pub fn with_fields(self, fields: Fields) -> Self {
        self.with_body(Value::Object(fields))
    }
}

/// 一次成功（2xx）的 API 响应
///
/// 响应体对客户端不透明，需要类型化数据时调用 [`ApiResponse::json`]。
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// 将响应体解码为指定类型
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        <T as Deserialize>::deserialize(&self.body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

/// HTTP Transport Port
///
/// 每次调用只发送一个请求：不重试、不缓存、不改写结果。
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// 发送请求
    ///
    /// 非 2xx 响应以 `ClientError::Status` 返回
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;

    /// 检查后端是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Setting;
    use serde_json::json;

    #[test]
    fn test_request_builders() {
        let req = ApiRequest::put("/settings/theme").with_body(json!({ "value": "dark" }));
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.path, "/settings/theme");
        assert_eq!(req.body, Some(json!({ "value": "dark" })));
        assert_eq!(ApiRequest::delete("/x").body, None);
    }

    #[test]
    fn test_response_json_decodes() {
        let resp = ApiResponse::ok(json!([{ "key": "theme", "value": "dark" }]));
        let settings: Vec<Setting> = resp.json().unwrap();
        assert_eq!(settings[0].value, "dark");
    }

    #[test]
    fn test_response_json_reports_invalid_shape() {
        let resp = ApiResponse::ok(json!({ "unexpected": true }));
        let err = resp.json::<Vec<Setting>>().unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
