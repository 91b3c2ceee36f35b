//! Subtrack - 订阅管理应用开发服务器
//!
//! 启动流程：加载配置 → 初始化日志 → 注册图标并挂载外壳 → 绑定端口 → 探测后端 → 启动服务器

use std::sync::Arc;

use subtrack::application::ApiClient;
use subtrack::config::{load_config, print_config};
use subtrack::domain::navigation::AppShell;
use subtrack::infrastructure::{AppState, DevServer, ReqwestTransport, ReverseProxy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},subtrack={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Subtrack - 订阅管理");
    print_config(&config);

    // 挂载前注册全部图标
    let app = AppShell::bootstrap()?.mount();

    let proxy = ReverseProxy::new(
        config.dev_server.proxy_target.clone(),
        config.dev_server.change_origin,
        config.dev_server.proxy_timeout(),
    )?;
    let server = DevServer::new(config.dev_server.clone(), AppState::new(app, proxy));
    let listener = server.bind().await?;

    // 经 api.origin 探测后端可用性，不阻塞启动
    let client = ApiClient::new(Arc::new(ReqwestTransport::new(
        config.api.transport_config(),
    )?));
    let origin = config.api.origin.clone();
    let backend = config.dev_server.proxy_target.clone();
    tokio::spawn(async move {
        if client.health_check().await {
            tracing::info!(origin = %origin, backend = %backend, "Backend is healthy");
        } else {
            tracing::warn!(
                origin = %origin,
                backend = %backend,
                "Backend health check failed, /api requests may fail"
            );
        }
    });

    server
        .serve(listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
