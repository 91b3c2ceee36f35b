//! Subtrack - 订阅管理应用客户端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Subscription / Setting: 后端资源的客户端表示
//! - Analytics: 统计分析响应
//! - Navigation: 视图路由表、图标注册、应用外壳
//!
//! 应用层 (application/):
//! - Ports: HttpTransport
//! - Api: SubscriptionApi, SettingsApi, NotificationApi, AnalyticsApi
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Reqwest / Recording Transport
//! - HTTP: 开发服务器（视图路由 + /api 反向代理）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{ApiClient, ClientError};
pub use self::config::{load_config, AppConfig};
