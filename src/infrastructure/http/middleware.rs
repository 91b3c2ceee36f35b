//! HTTP Middleware
//!
//! - 请求 ID：缺失时生成 `x-request-id`，随请求转发并回写到响应
//! - 4xx/5xx 响应的错误日志

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 请求 ID 中间件
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = match request.headers().get(&REQUEST_ID_HEADER) {
        Some(value) => value.clone(),
        None => {
            let generated = HeaderValue::from_str(&uuid::Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
            request
                .headers_mut()
                .insert(REQUEST_ID_HEADER, generated.clone());
            generated
        }
    };

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .entry(REQUEST_ID_HEADER)
        .or_insert(request_id);
    response
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志（包括上游经代理返回的状态码）
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn echo_request_id(request: Request) -> String {
        request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    async fn error_handler() -> StatusCode {
        StatusCode::BAD_GATEWAY
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/echo", get(echo_request_id))
            .route("/error", get(error_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/echo")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let header = response.headers().get(&REQUEST_ID_HEADER).unwrap();
        assert_eq!(header.to_str().unwrap().len(), 36);
    }

    #[tokio::test]
    async fn test_preserves_incoming_request_id() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/echo")
            .header("x-request-id", "req-123")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.headers()[&REQUEST_ID_HEADER], "req-123");
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"req-123");
    }

    #[tokio::test]
    async fn test_server_error_passes_through() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/error")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
