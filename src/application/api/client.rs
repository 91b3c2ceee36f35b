//! API Client
//!
//! 显式构造、按引用/所有权传递的客户端，不存在全局单例。
//! 各资源的操作见 `SubscriptionApi`、`SettingsApi`、`NotificationApi`、`AnalyticsApi`。

use std::sync::Arc;

use crate::application::error::ClientError;
use crate::application::ports::{ApiRequest, ApiResponse, HttpTransport};

/// 所有操作的返回类型
pub type ApiResult = Result<ApiResponse, ClientError>;

/// API 客户端
///
/// 无状态：只持有注入的传输层。
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// 检查后端是否可用
    pub async fn health_check(&self) -> bool {
        self.transport.health_check().await
    }

    /// 发送单个请求，结果原样返回
    pub(crate) async fn execute(&self, request: ApiRequest) -> ApiResult {
        let method = request.method.clone();
        let path = request.path.clone();

        tracing::debug!(method = %method, path = %path, "Sending API request");

        let result = self.transport.send(request).await;
        match &result {
            Ok(response) => {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    status = response.status.as_u16(),
                    "API request completed"
                );
            }
            Err(e) => {
                tracing::warn!(method = %method, path = %path, error = %e, "API request failed");
            }
        }
        result
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}
