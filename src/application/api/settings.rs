//! Settings API

use async_trait::async_trait;

use super::client::{ApiClient, ApiResult};
use crate::application::endpoints;
use crate::application::ports::ApiRequest;
use crate::domain::{Fields, SettingKey, SettingsBatch};

/// 设置资源操作
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// GET /settings
    async fn list_settings(&self) -> ApiResult;

    /// GET /settings/{key}
    async fn get_setting(&self, key: &SettingKey) -> ApiResult;

    /// POST /settings，整个映射作为一个请求体
    async fn update_settings(&self, batch: &SettingsBatch) -> ApiResult;

    /// PUT /settings/{key}
    async fn update_setting(&self, key: &SettingKey, fields: Fields) -> ApiResult;
}

#[async_trait]
impl SettingsApi for ApiClient {
    async fn list_settings(&self) -> ApiResult {
        self.execute(ApiRequest::get(endpoints::SETTINGS)).await
    }

    async fn get_setting(&self, key: &SettingKey) -> ApiResult {
        self.execute(ApiRequest::get(endpoints::setting(key))).await
    }

    async fn update_settings(&self, batch: &SettingsBatch) -> ApiResult {
        self.execute(ApiRequest::post(endpoints::SETTINGS).with_fields(batch.to_fields()))
            .await
    }

    async fn update_setting(&self, key: &SettingKey, fields: Fields) -> ApiResult {
        self.execute(ApiRequest::put(endpoints::setting(key)).with_fields(fields))
            .await
    }
}
