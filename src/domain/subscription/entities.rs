//! Subscription Context - Entities & Payloads

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value_objects::{BillingCycle, SubscriptionId};
use crate::domain::Fields;

/// 默认货币
pub const DEFAULT_CURRENCY: &str = "CNY";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// 后端返回的订阅记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub cycle: BillingCycle,
    pub next_due_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Subscription {
    /// 月度成本
    pub fn monthly_cost(&self) -> f64 {
        self.cycle.monthly_cost(self.price)
    }

    /// 年度成本
    pub fn yearly_cost(&self) -> f64 {
        self.cycle.yearly_cost(self.price)
    }

    /// 在 `horizon` 之前（含）到期
    pub fn is_due_by(&self, horizon: NaiveDate) -> bool {
        self.next_due_date <= horizon
    }
}

/// 创建订阅的请求体
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionDraft {
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub cycle: BillingCycle,
    pub next_due_date: NaiveDate,
    pub notes: Option<String>,
}

impl SubscriptionDraft {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        cycle: BillingCycle,
        next_due_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            currency: default_currency(),
            cycle,
            next_due_date,
            notes: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// 转换为发送给后端的字段映射
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), Value::from(self.name.clone()));
        fields.insert("price".into(), Value::from(self.price));
        fields.insert("currency".into(), Value::from(self.currency.clone()));
        fields.insert("cycle".into(), Value::from(self.cycle.as_str()));
        fields.insert(
            "next_due_date".into(),
            Value::from(self.next_due_date.to_string()),
        );
        fields.insert(
            "notes".into(),
            self.notes.clone().map(Value::from).unwrap_or(Value::Null),
        );
        fields
    }
}

/// 更新订阅的请求体
///
/// 只有设置过的字段会出现在字段映射中，后端按部分更新处理。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub cycle: Option<BillingCycle>,
    pub next_due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl SubscriptionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn cycle(mut self, cycle: BillingCycle) -> Self {
        self.cycle = Some(cycle);
        self
    }

    pub fn next_due_date(mut self, date: NaiveDate) -> Self {
        self.next_due_date = Some(date);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_fields().is_empty()
    }

    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        if let Some(name) = &self.name {
            fields.insert("name".into(), Value::from(name.clone()));
        }
        if let Some(price) = self.price {
            fields.insert("price".into(), Value::from(price));
        }
        if let Some(currency) = &self.currency {
            fields.insert("currency".into(), Value::from(currency.clone()));
        }
        if let Some(cycle) = self.cycle {
            fields.insert("cycle".into(), Value::from(cycle.as_str()));
        }
        if let Some(date) = self.next_due_date {
            fields.insert("next_due_date".into(), Value::from(date.to_string()));
        }
        if let Some(notes) = &self.notes {
            fields.insert("notes".into(), Value::from(notes.clone()));
        }
        fields
    }
}
