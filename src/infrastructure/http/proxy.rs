//! Reverse Proxy - 开发期 `/api` 转发
//!
//! 将 `/api` 下的请求原样（方法、路径、查询串、请求体、端到端请求头）
//! 转发到上游后端。只在本地开发时使用。

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    response::Response,
};
use http::{header, HeaderMap, HeaderName};
use std::time::Duration;

use super::error::ServerError;

/// 请求体上限（50MB）
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// 不应跨越代理转发的逐跳头
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// 复制端到端头，Content-Length 由新的 body 重新计算
fn end_to_end_headers(headers: &HeaderMap, keep_host: bool) -> HeaderMap {
    let mut forwarded = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || *name == header::CONTENT_LENGTH {
            continue;
        }
        if !keep_host && *name == header::HOST {
            continue;
        }
        forwarded.append(name.clone(), value.clone());
    }
    forwarded
}

/// 反向代理
pub struct ReverseProxy {
    client: reqwest::Client,
    target: String,
    change_origin: bool,
}

impl ReverseProxy {
    pub fn new(
        target: impl Into<String>,
        change_origin: bool,
        timeout: Duration,
    ) -> Result<Self, ServerError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(timeout)
            .build()
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            target: target.into().trim_end_matches('/').to_string(),
            change_origin,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// 上游 URL：target + 原始路径和查询串
    pub fn upstream_url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.target, path_and_query)
    }

    /// 转发请求并返回上游响应
    pub async fn forward(&self, request: Request) -> Result<Response, ServerError> {
        let (parts, body) = request.into_parts();
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let url = self.upstream_url(path_and_query);

        let body = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {}", e)))?;

        tracing::debug!(
            method = %parts.method,
            url = %url,
            body_len = body.len(),
            "Proxying request upstream"
        );

        let upstream = self
            .client
            .request(parts.method.clone(), &url)
            .headers(end_to_end_headers(&parts.headers, !self.change_origin))
            .body(body)
            .send()
            .await?;

        let status = upstream.status();
        let headers = end_to_end_headers(upstream.headers(), true);
        let bytes = upstream.bytes().await?;

        tracing::debug!(
            method = %parts.method,
            url = %url,
            status = status.as_u16(),
            "Upstream responded"
        );

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}
