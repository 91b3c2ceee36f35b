//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

use crate::infrastructure::adapters::{
    ReqwestTransportConfig, DEFAULT_BASE_PATH, DEFAULT_TIMEOUT_MS,
};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// API 客户端配置
    #[serde(default)]
    pub api: ApiConfig,

    /// 开发服务器配置
    #[serde(default)]
    pub dev_server: DevServerConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// API 客户端配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// 请求发往的来源，开发时即 dev server 地址，`/api` 与 `/health` 由其转发到后端
    #[serde(default = "default_api_origin")]
    pub origin: String,

    /// 所有请求路径的固定前缀
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// 请求超时时间（毫秒），对所有请求统一生效
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_api_origin(),
            base_path: default_base_path(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// 转换为 Transport 配置
    pub fn transport_config(&self) -> ReqwestTransportConfig {
        ReqwestTransportConfig::new(self.origin.clone())
            .with_base_path(self.base_path.clone())
            .with_timeout_ms(self.timeout_ms)
    }
}

/// 开发服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct DevServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// `/api` 请求转发的上游后端
    #[serde(default = "default_proxy_target")]
    pub proxy_target: String,

    /// 转发时将 Host 改写为上游地址
    #[serde(default = "default_change_origin")]
    pub change_origin: bool,

    /// 转发超时时间（毫秒），超时返回 504
    #[serde(default = "default_proxy_timeout_ms")]
    pub proxy_timeout_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_proxy_target() -> String {
    "http://backend:8000".to_string()
}

fn default_change_origin() -> bool {
    true
}

fn default_proxy_timeout_ms() -> u64 {
    30_000
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            proxy_target: default_proxy_target(),
            change_origin: default_change_origin(),
            proxy_timeout_ms: default_proxy_timeout_ms(),
        }
    }
}

impl DevServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_millis(self.proxy_timeout_ms)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
