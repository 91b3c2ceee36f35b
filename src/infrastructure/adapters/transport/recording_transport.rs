//! Recording Transport - 内存中的 Transport
//!
//! 不发出网络请求：记录每个请求，按 (method, path) 回放预设的响应或错误，
//! 未预设时返回 200 + null。

use async_trait::async_trait;
use http::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::application::error::ClientError;
use crate::application::ports::{ApiRequest, ApiResponse, HttpTransport};

type Reply = Result<ApiResponse, ClientError>;

/// Recording Transport
#[derive(Debug)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<HashMap<(Method, String), Reply>>,
    healthy: bool,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(HashMap::new()),
            healthy: true,
        }
    }

    /// 设置健康检查结果
    pub fn with_health(mut self, healthy: bool) -> Self {
        self.healthy = healthy;
        self
    }

    /// 预设成功响应
    pub fn respond(&self, method: Method, path: impl Into<String>, body: Value) {
        lock(&self.replies).insert((method, path.into()), Ok(ApiResponse::ok(body)));
    }

    /// 预设失败
    pub fn fail(&self, method: Method, path: impl Into<String>, error: ClientError) {
        lock(&self.replies).insert((method, path.into()), Err(error));
    }

    /// 已记录的全部请求（按发送顺序）
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        lock(&self.requests).last().cloned()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let key = (request.method.clone(), request.path.clone());
        lock(&self.requests).push(request);

        lock(&self.replies)
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(ApiResponse::ok(Value::Null)))
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}
