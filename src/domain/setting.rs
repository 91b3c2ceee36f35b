//! Setting Context - 键值设置

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::Fields;

/// Telegram Bot Token 的设置键
pub const TELEGRAM_TOKEN_KEY: &str = "telegram_token";

/// Telegram Chat ID 的设置键
pub const TELEGRAM_CHAT_ID_KEY: &str = "telegram_chat_id";

/// 设置键，原样拼接进请求路径
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingKey(String);

impl SettingKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SettingKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for SettingKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 后端返回的设置记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: SettingKey,
    pub value: String,
}

/// 单项设置更新的请求体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingUpdate {
    pub value: String,
}

impl SettingUpdate {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("value".into(), Value::from(self.value.clone()));
        fields
    }
}

/// 批量设置：key → value，作为单个请求体发送
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsBatch {
    entries: BTreeMap<String, Value>,
}

impl SettingsBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_fields(&self) -> Fields {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SettingsBatch {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_fields() {
        let batch = SettingsBatch::new().set("theme", "dark").set("lang", "en");
        assert_eq!(batch.len(), 2);
        assert_eq!(
            Value::Object(batch.to_fields()),
            json!({ "theme": "dark", "lang": "en" })
        );
    }

    #[test]
    fn test_batch_last_write_wins() {
        let batch: SettingsBatch = [("theme", "dark"), ("theme", "light")].into_iter().collect();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.to_fields()["theme"], json!("light"));
    }

    #[test]
    fn test_setting_update_fields() {
        let update = SettingUpdate::new("123456");
        assert_eq!(Value::Object(update.to_fields()), json!({ "value": "123456" }));
    }

    #[test]
    fn test_setting_deserialize() {
        let setting: Setting =
            serde_json::from_value(json!({ "key": TELEGRAM_CHAT_ID_KEY, "value": "42" })).unwrap();
        assert_eq!(setting.key.as_str(), "telegram_chat_id");
        assert_eq!(setting.value, "42");
    }
}
