//! API Client - 每个资源一个 trait，每个操作一个方法
//!
//! 每个方法只发出一个请求并原样返回结果：不重试、不缓存、不做级联调用。

mod analytics;
mod client;
mod notifications;
mod settings;
mod subscriptions;

pub use analytics::AnalyticsApi;
pub use client::{ApiClient, ApiResult};
pub use notifications::NotificationApi;
pub use settings::SettingsApi;
pub use subscriptions::SubscriptionApi;
