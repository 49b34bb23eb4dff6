//! HEAD 요청 거부 middleware.
//!
//! Axum은 GET 라우트에 HEAD를 자동으로 연결합니다. 라우팅 테이블은
//! 메서드+경로 정확 일치이므로 HEAD는 등록되지 않은 조합과 같이 404입니다.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::not_found;

/// GET 라우트로 암묵 연결되는 HEAD 요청을 404로 돌려보냅니다.
pub async fn reject_head_layer(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD {
        debug!(path = %request.uri().path(), "HEAD is not a registered method");
        return not_found(request.method(), request.uri()).into_response();
    }
    next.run(request).await
}
