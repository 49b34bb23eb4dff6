//! 미들웨어가 적용된 전체 라우터.
//!
//! 레이어 순서 (바깥 → 안):
//! 요청 로깅 → HTTP trace → CORS → HEAD 거부 → 메트릭 → 타임아웃 → 패닉 복구 → 라우팅 테이블
//!
//! CORS 레이어는 모든 OPTIONS 요청에 라우팅 전에 빈 200 응답으로 답하고,
//! 그 밖의 응답(에러 포함)에는 `Access-Control-Allow-Origin: *`를 붙입니다.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::internal_error;
use crate::middleware::{metrics_layer, reject_head_layer, request_log_layer};
use crate::routes::create_api_router;
use crate::state::AppState;

/// preflight 응답 캐시 시간.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// 전체 라우터 생성.
pub fn create_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    with_middleware(create_api_router().with_state(state), request_timeout)
}

/// 라우터에 공통 미들웨어 스택을 적용합니다.
pub fn with_middleware(router: Router, request_timeout: Duration) -> Router {
    router
        // 핸들러 패닉 → 500 (프로세스와 다른 요청은 계속 동작)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::from_fn(metrics_layer))
        // CORS 안쪽에 두어 404에도 CORS 헤더가 붙도록 함
        .layer(middleware::from_fn(reject_head_layer))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_log_layer))
}

/// CORS 미들웨어 구성.
///
/// 모든 origin을 허용합니다. wildcard origin과 함께 쓸 수 없으므로
/// 자격 증명 허용은 켜지 않습니다.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        // 허용되는 HTTP 메서드
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        // 허용되는 헤더
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(PREFLIGHT_MAX_AGE)
}

/// 패닉을 일반 500 응답으로 변환합니다. 패닉 내용은 로그에만 남깁니다.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    error!(panic = %detail, "Handler panicked");

    internal_error().into_response()
}
