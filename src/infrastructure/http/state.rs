//! Application State
//!
//! 开发服务器共享状态：已挂载的应用外壳 + `/api` 反向代理

use crate::domain::navigation::MountedApp;

use super::proxy::ReverseProxy;

/// 应用状态
pub struct AppState {
    pub app: MountedApp,
    pub proxy: ReverseProxy,
}

impl AppState {
    pub fn new(app: MountedApp, proxy: ReverseProxy) -> Self {
        Self { app, proxy }
    }
}
