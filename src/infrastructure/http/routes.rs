//! HTTP Routes
//!
//! 开发服务器路由
//!
//! - /            GET   SubscriptionList 视图
//! - /calendar    GET   Calendar 视图
//! - /analytics   GET   Analytics 视图
//! - /settings    GET   Settings 视图
//! - /api, /api/* ANY   转发到上游后端
//! - /health      ANY   转发到上游后端健康检查
//!
//! 其他路径一律 404。

use axum::{
    extract::State,
    routing::{any, get},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;
use crate::domain::navigation::ROUTES;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    let router = Router::new()
        .route("/api", any(handlers::proxy_api))
        .route("/api/*path", any(handlers::proxy_api))
        .route("/health", any(handlers::proxy_api));

    ROUTES
        .iter()
        .fold(router, |router, route| {
            let view = route.view;
            router.route(
                route.path,
                get(move |State(state): State<Arc<AppState>>| async move {
                    handlers::render_view(&state, view)
                }),
            )
        })
        .fallback(handlers::not_found)
}
