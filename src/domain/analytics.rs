//! Analytics - 统计分析响应
//!
//! 客户端本身不解析响应体，这些类型供调用方通过 `ApiResponse::json` 按需解码。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::subscription::{BillingCycle, Subscription};

/// 单个计费周期的统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleAnalysis {
    pub cycle: BillingCycle,
    pub count: u32,
    pub total_amount: f64,
    pub average_price: f64,
}

/// 订阅综合统计（/analytics/subscription）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionAnalytics {
    pub total_subscriptions: u32,
    pub active_subscriptions: u32,
    pub total_monthly_cost: f64,
    pub total_yearly_cost: f64,
    #[serde(default)]
    pub cycle_breakdown: Vec<CycleAnalysis>,
    /// 30 天内到期的订阅
    #[serde(default)]
    pub upcoming_renewals: Vec<Subscription>,
    /// 价格区间分布，如 "0-50"、"500+"
    #[serde(default)]
    pub price_ranges: BTreeMap<String, u32>,
}

/// 单月支出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpending {
    /// YYYY-MM
    pub month: String,
    pub total_amount: f64,
    pub currency: String,
    pub subscription_count: u32,
}

/// 货币维度的累计成本
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyTotals {
    #[serde(default)]
    pub monthly: f64,
    #[serde(default)]
    pub yearly: f64,
}

/// 价格趋势（/analytics/price-trend），最近 12 个月按时间升序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTrend {
    pub monthly_spending: Vec<MonthlySpending>,
    pub total_monthly: f64,
    pub total_yearly: f64,
    #[serde(default)]
    pub currency_breakdown: BTreeMap<String, CurrencyTotals>,
}

/// 时间线上的一个按月分桶
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// YYYY-MM
    pub date: String,
    pub count: u32,
    pub amount: f64,
}

/// 综合趋势分析（/analytics/comprehensive）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub subscription_analytics: SubscriptionAnalytics,
    pub price_trend: PriceTrend,
    #[serde(default)]
    pub creation_timeline: Vec<TimelinePoint>,
    #[serde(default)]
    pub renewal_timeline: Vec<TimelinePoint>,
}
