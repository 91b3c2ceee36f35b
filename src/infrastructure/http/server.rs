//! HTTP Server
//!
//! 开发服务器启动和配置

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::{error_logging_middleware, request_id_middleware};
use super::routes::create_routes;
use super::state::AppState;
use crate::config::DevServerConfig;

/// 开发服务器
pub struct DevServer {
    config: DevServerConfig,
    state: Arc<AppState>,
}

impl DevServer {
    /// 创建新的开发服务器
    pub fn new(config: DevServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    pub fn build_router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
            .expose_headers(Any)
            .max_age(std::time::Duration::from_secs(3600));

        create_routes()
            .layer(DefaultBodyLimit::max(50 * 1024 * 1024))
            .layer(middleware::from_fn(error_logging_middleware))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// 绑定监听地址
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.config.addr()).await
    }

    /// 在已绑定的监听器上提供服务（带优雅关闭）
    pub async fn serve<F>(
        self,
        listener: TcpListener,
        shutdown_signal: F,
    ) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        info!(
            "Starting dev server on {} (proxying /api to {})",
            listener.local_addr()?,
            self.state.proxy.target()
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal).await
    }
}
