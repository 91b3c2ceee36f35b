//! Notification API

use async_trait::async_trait;

use super::client::{ApiClient, ApiResult};
use crate::application::endpoints;
use crate::application::ports::ApiRequest;

/// 通知渠道操作
#[async_trait]
pub trait NotificationApi: Send + Sync {
    /// POST /telegram/test - 发送测试消息
    async fn test_notification(&self) -> ApiResult;

    /// POST /reminders/check - 手动触发到期提醒检查
    async fn check_reminders(&self) -> ApiResult;
}

#[async_trait]
impl NotificationApi for ApiClient {
    async fn test_notification(&self) -> ApiResult {
        self.execute(ApiRequest::post(endpoints::TELEGRAM_TEST)).await
    }

    async fn check_reminders(&self) -> ApiResult {
        self.execute(ApiRequest::post(endpoints::REMINDERS_CHECK)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ClientError;
    use crate::infrastructure::adapters::RecordingTransport;
    use http::{Method, StatusCode};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_notification_posts_without_body() {
        let transport = Arc::new(RecordingTransport::new());
        let client = ApiClient::new(transport.clone());

        client.test_notification().await.unwrap();

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/telegram/test");
        assert_eq!(req.body, None);
    }

    #[tokio::test]
    async fn test_notification_failure_is_surfaced() {
        let transport = Arc::new(RecordingTransport::new());
        transport.fail(
            Method::POST,
            "/telegram/test",
            ClientError::status(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send test message"),
        );
        let client = ApiClient::new(transport.clone());

        let err = client.test_notification().await.unwrap_err();
        assert_eq!(err.status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_check_reminders() {
        let transport = Arc::new(RecordingTransport::new());
        let client = ApiClient::new(transport.clone());

        client.check_reminders().await.unwrap();

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/reminders/check");
    }
}
