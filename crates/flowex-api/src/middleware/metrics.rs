//! HTTP 요청 metrics middleware.
//!
//! path 라벨은 요청 URI가 아니라 매칭된 라우트 템플릿입니다. fallback으로 빠진
//! 요청은 [`UNMATCHED_PATH`](crate::metrics::UNMATCHED_PATH) 하나로 묶입니다.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::metrics::{path_label, record_http_duration, record_http_request, record_http_response};

/// 요청 하나의 메트릭 라벨.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HttpLabels {
    method: String,
    path: String,
}

impl HttpLabels {
    fn from_request(request: &Request) -> Self {
        let matched = request.extensions().get::<MatchedPath>();
        Self {
            method: request.method().to_string(),
            path: path_label(matched.map(MatchedPath::as_str)).to_string(),
        }
    }
}

/// HTTP 메트릭 수집 레이어.
///
/// `http_requests_total`, `http_responses_total`(status 포함),
/// `http_request_duration_seconds`를 method/path 라벨로 기록합니다.
pub async fn metrics_layer(request: Request, next: Next) -> Response {
    let labels = HttpLabels::from_request(&request);
    let started = Instant::now();
    record_http_request(&labels.method, &labels.path);

    let response = next.run(request).await;

    record_http_response(&labels.method, &labels.path, response.status().as_u16());
    record_http_duration(&labels.method, &labels.path, started.elapsed().as_secs_f64());
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::UNMATCHED_PATH;
    use axum::{
        body::Body,
        http::{HeaderValue, Method, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    const LABEL_HEADER: &str = "x-path-label";

    /// metrics_layer와 같은 위치에서 계산된 path 라벨을 응답 헤더로 노출.
    async fn expose_label(request: Request, next: Next) -> Response {
        let labels = HttpLabels::from_request(&request);
        let mut response = next.run(request).await;
        if let Ok(value) = HeaderValue::from_str(&labels.path) {
            response.headers_mut().insert(LABEL_HEADER, value);
        }
        response
    }

    fn app() -> Router {
        Router::new()
            .route("/api/trading/pairs", get(|| async { "[]" }))
            .method_not_allowed_fallback(|| async { StatusCode::NOT_FOUND })
            .layer(middleware::from_fn(expose_label))
            .layer(middleware::from_fn(metrics_layer))
    }

    async fn label_for(method: Method, uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let label = response.headers()[LABEL_HEADER].to_str().unwrap().to_string();
        (response.status(), label)
    }

    #[tokio::test]
    async fn test_matched_route_uses_template() {
        let (status, label) = label_for(Method::GET, "/api/trading/pairs?limit=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(label, "/api/trading/pairs");
    }

    #[tokio::test]
    async fn test_fallback_hits_are_unmatched() {
        for uri in ["/random/path/12345", "/api/trading/pairs/BTC-USDT"] {
            let (status, label) = label_for(Method::GET, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(label, UNMATCHED_PATH, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_wrong_method_keeps_route_template() {
        let (status, label) = label_for(Method::DELETE, "/api/trading/pairs").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(label, "/api/trading/pairs");
    }
}
