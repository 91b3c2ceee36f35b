//! Subscription Context - Value Objects

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// 订阅唯一标识
///
/// 对客户端而言是不透明的：原样拼接进请求路径，不做编码或校验。
/// 后端以整数返回，反序列化时同时接受数字和字符串。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SubscriptionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Str(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(id) => id.into(),
            RawId::Str(id) => id.into(),
        })
    }
}

impl From<i64> for SubscriptionId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for SubscriptionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SubscriptionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 计费周期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingCycle {
    /// 一个周期包含的月数
    pub fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Yearly => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// 续费一个周期后的下次到期日
    ///
    /// 按日历月计算，月末日期会收缩到目标月的最后一天（1-31 + 1 月 = 2-28/29）。
    /// 超出 chrono 可表示范围时返回 None。
    pub fn advance(&self, due: NaiveDate) -> Option<NaiveDate> {
        due.checked_add_months(Months::new(self.months()))
    }

    /// 折算为月度成本
    pub fn monthly_cost(&self, price: f64) -> f64 {
        price / f64::from(self.months())
    }

    /// 折算为年度成本
    pub fn yearly_cost(&self, price: f64) -> f64 {
        price * f64::from(12 / self.months())
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            other => Err(format!("Invalid subscription cycle: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_subscription_id_is_verbatim() {
        assert_eq!(SubscriptionId::from(42_i64).to_string(), "42");
        assert_eq!(SubscriptionId::from("a b/c").as_str(), "a b/c");
    }

    #[test]
    fn test_subscription_id_accepts_numbers_and_strings() {
        let id: SubscriptionId = serde_json::from_str("12").unwrap();
        assert_eq!(id.as_str(), "12");
        let id: SubscriptionId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn test_cycle_advance() {
        assert_eq!(BillingCycle::Monthly.advance(date(2024, 1, 15)), Some(date(2024, 2, 15)));
        assert_eq!(BillingCycle::Quarterly.advance(date(2024, 11, 1)), Some(date(2025, 2, 1)));
        assert_eq!(BillingCycle::Yearly.advance(date(2024, 2, 29)), Some(date(2025, 2, 28)));
    }

    #[test]
    fn test_cycle_advance_clamps_month_end() {
        assert_eq!(BillingCycle::Monthly.advance(date(2024, 1, 31)), Some(date(2024, 2, 29)));
        assert_eq!(BillingCycle::Monthly.advance(date(2023, 1, 31)), Some(date(2023, 2, 28)));
    }

    #[test]
    fn test_cycle_costs() {
        assert_eq!(BillingCycle::Monthly.monthly_cost(30.0), 30.0);
        assert_eq!(BillingCycle::Quarterly.monthly_cost(30.0), 10.0);
        assert_eq!(BillingCycle::Yearly.monthly_cost(120.0), 10.0);
        assert_eq!(BillingCycle::Monthly.yearly_cost(10.0), 120.0);
        assert_eq!(BillingCycle::Quarterly.yearly_cost(10.0), 40.0);
        assert_eq!(BillingCycle::Yearly.yearly_cost(10.0), 10.0);
    }

    #[test]
    fn test_cycle_serde_lowercase() {
        let json = serde_json::to_string(&BillingCycle::Quarterly).unwrap();
        assert_eq!(json, "\"quarterly\"");
        let cycle: BillingCycle = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(cycle, BillingCycle::Yearly);
        assert!("weekly".parse::<BillingCycle>().is_err());
    }
}
