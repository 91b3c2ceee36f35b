//! 应用层 - API 客户端
//!
//! 包含：
//! - ports: 六边形架构端口定义（HttpTransport）
//! - endpoints: 请求路径
//! - api: 按资源划分的客户端操作
//! - error: 客户端错误定义

pub mod api;
pub mod endpoints;
pub mod error;
pub mod ports;

pub use api::{
    AnalyticsApi, ApiClient, ApiResult, NotificationApi, SettingsApi, SubscriptionApi,
};
pub use error::ClientError;
pub use ports::{ApiRequest, ApiResponse, HttpTransport};
