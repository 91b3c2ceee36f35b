//! Domain Layer - 领域层
//!
//! 包含以下上下文:
//! - Subscription Context: 订阅
//! - Setting Context: 键值设置
//! - Analytics: 统计分析响应
//! - Navigation Context: 视图路由与应用外壳

pub mod analytics;
pub mod navigation;
pub mod setting;
pub mod subscription;

/// 请求体中的字段映射，对客户端不透明
pub type Fields = serde_json::Map<String, serde_json::Value>;

pub use setting::{Setting, SettingKey, SettingUpdate, SettingsBatch};
pub use subscription::{
    BillingCycle, Subscription, SubscriptionDraft, SubscriptionId, SubscriptionPatch,
};
