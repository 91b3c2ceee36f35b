//! API Proxy Handler
//!
//! `/api` 及其子路径全部转发到上游后端

use axum::{
    extract::{Request, State},
    response::Response,
};
use std::sync::Arc;

use crate::infrastructure::http::error::ServerError;
use crate::infrastructure::http::state::AppState;

pub async fn proxy_api(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Response, ServerError> {
    state.proxy.forward(request).await
}
