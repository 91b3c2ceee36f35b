//! Reqwest Transport - 通过 HTTP 调用后端 REST API
//!
//! 实现 HttpTransport trait
//!
//! URL = origin + base_path + path，例如
//! `http://localhost:3000` + `/api` + `/subscriptions/42`
//!
//! 超时对所有请求统一生效（默认 10000ms），不支持单次覆盖。

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::application::error::ClientError;
use crate::application::ports::{ApiRequest, ApiResponse, HttpTransport};

/// 默认 base path
pub const DEFAULT_BASE_PATH: &str = "/api";

/// 默认请求超时（毫秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// 健康检查超时
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Reqwest Transport 配置
#[derive(Debug, Clone)]
pub struct ReqwestTransportConfig {
    /// 服务来源，如 http://localhost:3000
    pub origin: String,
    /// 所有请求路径的固定前缀
    pub base_path: String,
    /// 请求超时时间（毫秒）
    pub timeout_ms: u64,
}

impl Default for ReqwestTransportConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:3000".to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ReqwestTransportConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Default::default()
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Reqwest HTTP Transport
pub struct ReqwestTransport {
    client: Client,
    config: ReqwestTransportConfig,
    cancel: Option<CancellationToken>,
}

impl ReqwestTransport {
    /// 创建新的 Transport
    pub fn new(config: ReqwestTransportConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            config,
            cancel: None,
        })
    }

    /// 使用默认配置创建
    pub fn with_default_config() -> Result<Self, ClientError> {
        Self::new(ReqwestTransportConfig::default())
    }

    /// 绑定取消令牌，令牌取消后所有进行中和后续请求都以 `Cancelled` 结束
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &ReqwestTransportConfig {
        &self.config
    }

    /// 拼接完整 URL
    fn url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.config.origin.trim_end_matches('/'),
            self.config.base_path.trim_end_matches('/'),
            path
        )
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.origin.trim_end_matches('/'))
    }

    fn map_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(self.config.timeout())
        } else if e.is_connect() {
            ClientError::Network(format!("Cannot connect to backend: {}", e))
        } else if e.is_builder() {
            ClientError::InvalidRequest(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = self.url(&request.path);

        let mut builder = self.client.request(request.method, &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_error(e))?;

        if !status.is_success() {
            return Err(ClientError::status(status, text));
        }

        Ok(ApiResponse::new(status, parse_body(&text)))
    }
}

/// 解析响应体：空 → null，JSON → 解析结果，其他 → 原文字符串
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        match &self.cancel {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => Err(ClientError::Cancelled),
                    result = self.dispatch(request) => result,
                }
            }
            None => self.dispatch(request).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
