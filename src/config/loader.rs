//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SUBTRACK_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SUBTRACK_API__TIMEOUT_MS=5000`
/// - `SUBTRACK_DEV_SERVER__PORT=3001`
/// - `SUBTRACK_DEV_SERVER__PROXY_TARGET=http://127.0.0.1:8000`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("api.origin", "http://localhost:3000")?
        .set_default("api.base_path", "/api")?
        .set_default("api.timeout_ms", 10_000)?
        .set_default("dev_server.host", "0.0.0.0")?
        .set_default("dev_server.port", 3000)?
        .set_default("dev_server.proxy_target", "http://backend:8000")?
        .set_default("dev_server.change_origin", true)?
        .set_default("dev_server.proxy_timeout_ms", 30_000)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: SUBTRACK_DEV_SERVER__PORT=3001
    builder = builder.add_source(
        Environment::with_prefix("SUBTRACK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.api.origin.is_empty() {
        return Err(ConfigError::ValidationError(
            "API origin cannot be empty".to_string(),
        ));
    }

    let base_path = &config.api.base_path;
    if !base_path.starts_with('/') || base_path.ends_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "API base path must start with '/' and have no trailing '/': {}",
            base_path
        )));
    }

    if config.api.timeout_ms == 0 {
        return Err(ConfigError::ValidationError(
            "API timeout cannot be 0".to_string(),
        ));
    }

    if config.dev_server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Dev server port cannot be 0".to_string(),
        ));
    }

    if config.dev_server.proxy_timeout_ms == 0 {
        return Err(ConfigError::ValidationError(
            "Proxy timeout cannot be 0".to_string(),
        ));
    }

    if config.dev_server.proxy_target.is_empty() {
        return Err(ConfigError::ValidationError(
            "Proxy target cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("API: {}{}", config.api.origin, config.api.base_path);
    tracing::info!("API Timeout: {}ms", config.api.timeout_ms);
    tracing::info!("Dev Server: {}", config.dev_server.addr());
    tracing::info!("Proxy Target: {}", config.dev_server.proxy_target);
    tracing::info!("Change Origin: {}", config.dev_server.change_origin);
    tracing::info!("Proxy Timeout: {}ms", config.dev_server.proxy_timeout_ms);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.dev_server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.api.timeout_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_bad_base_path() {
        let mut config = AppConfig::default();
        config.api.base_path = "api".to_string();
        assert!(validate_config(&config).is_err());

        config.api.base_path = "/api/".to_string();
        assert!(validate_config(&config).is_err());

        config.api.base_path = "/v2/api".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_root_base_path() {
        let mut config = AppConfig::default();
        config.api.base_path = "/".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_zero_proxy_timeout() {
        let mut config = AppConfig::default();
        config.dev_server.proxy_timeout_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_proxy_target() {
        let mut config = AppConfig::default();
        config.dev_server.proxy_target = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[api]
timeout_ms = 2500

[dev_server]
port = 3100
proxy_target = "http://127.0.0.1:8000"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.api.timeout_ms, 2500);
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.dev_server.port, 3100);
        assert_eq!(config.dev_server.proxy_target, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_load_from_file_runs_validation() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\ntimeout_ms = 0").unwrap();

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
