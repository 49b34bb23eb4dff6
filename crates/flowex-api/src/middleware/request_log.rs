//! 요청 로깅 middleware.
//!
//! 결과와 관계없이 모든 요청(OPTIONS, 404 포함)에 대해 타임스탬프, 메서드, 경로를
//! 기록합니다. tracing 이벤트 기록은 실패하지 않으므로 요청 처리를 중단시키지 않습니다.

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// 응답에 붙는 요청 ID 헤더.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 요청 로깅 레이어.
pub async fn request_log_layer(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let timestamp = chrono::Utc::now().to_rfc3339();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    info!(
        %request_id,
        %timestamp,
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Request handled"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
