//! HTTP Layer - 开发服务器
//!
//! 视图路由 + `/api` 反向代理

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod proxy;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ServerError;
pub use proxy::ReverseProxy;
pub use routes::create_routes;
pub use server::DevServer;
pub use state::AppState;
