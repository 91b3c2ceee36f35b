//! API Endpoints
//!
//! 所有路径都相对于 base path（`/api`），只由操作和标识参数决定。
//! 标识参数原样拼接，调用方负责提供 URL 安全的值。

use crate::domain::{SettingKey, SubscriptionId};

pub const SUBSCRIPTIONS: &str = "/subscriptions";
pub const SETTINGS: &str = "/settings";
pub const TELEGRAM_TEST: &str = "/telegram/test";
pub const REMINDERS_CHECK: &str = "/reminders/check";

pub const ANALYTICS_COMPREHENSIVE: &str = "/analytics/comprehensive";
pub const ANALYTICS_SUBSCRIPTION: &str = "/analytics/subscription";
pub const ANALYTICS_PRICE_TREND: &str = "/analytics/price-trend";
pub const ANALYTICS_CREATION_TIMELINE: &str = "/analytics/timeline/creation";
pub const ANALYTICS_RENEWAL_TIMELINE: &str = "/analytics/timeline/renewal";

/// /subscriptions/{id}
pub fn subscription(id: &SubscriptionId) -> String {
    format!("{}/{}", SUBSCRIPTIONS, id)
}

/// /subscriptions/{id}/renew
pub fn subscription_renew(id: &SubscriptionId) -> String {
    format!("{}/{}/renew", SUBSCRIPTIONS, id)
}

/// /settings/{key}
pub fn setting(key: &SettingKey) -> String {
    format!("{}/{}", SETTINGS, key)
}
