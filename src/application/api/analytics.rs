//! Analytics API

use async_trait::async_trait;

use super::client::{ApiClient, ApiResult};
use crate::application::endpoints;
use crate::application::ports::ApiRequest;

/// 统计分析查询
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// GET /analytics/comprehensive
    async fn comprehensive_analytics(&self) -> ApiResult;

    /// GET /analytics/subscription
    async fn subscription_analytics(&self) -> ApiResult;

    /// GET /analytics/price-trend
    async fn price_trend(&self) -> ApiResult;

    /// GET /analytics/timeline/creation
    async fn creation_timeline(&self) -> ApiResult;

    /// GET /analytics/timeline/renewal
    async fn renewal_timeline(&self) -> ApiResult;
}

#[async_trait]
impl AnalyticsApi for ApiClient {
    async fn comprehensive_analytics(&self) -> ApiResult {
        self.execute(ApiRequest::get(endpoints::ANALYTICS_COMPREHENSIVE))
            .await
    }

    async fn subscription_analytics(&self) -> ApiResult {
        self.execute(ApiRequest::get(endpoints::ANALYTICS_SUBSCRIPTION))
            .await
    }

    async fn price_trend(&self) -> ApiResult {
        self.execute(ApiRequest::get(endpoints::ANALYTICS_PRICE_TREND))
            .await
    }

    async fn creation_timeline(&self) -> ApiResult {
        self.execute(ApiRequest::get(endpoints::ANALYTICS_CREATION_TIMELINE))
            .await
    }

    async fn renewal_timeline(&self) -> ApiResult {
        self.execute(ApiRequest::get(endpoints::ANALYTICS_RENEWAL_TIMELINE))
            .await
    }
}
