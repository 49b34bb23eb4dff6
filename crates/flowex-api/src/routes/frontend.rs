//! 정적 HTML 페이지.
//!
//! 페이지는 컴파일 시 바이너리에 포함되며, 요청 시 파일시스템을 조회하지 않습니다.

use axum::{response::Html, routing::get, Router};
use std::sync::Arc;

use crate::state::AppState;

/// 데모 페이지 HTML.
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

/// 데모 페이지.
///
/// GET / , GET /index.html
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// 정적 페이지 라우터 생성.
pub fn frontend_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_index_served_on_both_paths() {
        let app = frontend_router().with_state(Arc::new(crate::state::create_test_state()));

        for uri in ["/", "/index.html"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.headers()["content-type"],
                "text/html; charset=utf-8"
            );

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert!(body.starts_with(b"<!DOCTYPE html>"));
        }
    }
}
