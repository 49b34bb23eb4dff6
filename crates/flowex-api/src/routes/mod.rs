//! API 라우트.
//!
//! 모든 엔드포인트를 (메서드, 경로) 정확 일치로 등록한 라우터를 구성합니다.
//! 경로 파라미터나 와일드카드는 사용하지 않습니다.
//!
//! # 라우트 구조
//!
//! | 메서드 | 경로 | 핸들러 |
//! |---|---|---|
//! | GET | `/health` | 헬스 체크 |
//! | POST | `/api/auth/login` | 로그인 |
//! | GET | `/api/trading/pairs` | 거래쌍 목록 |
//! | GET | `/api/market-data/tickers` | 합성 티커 목록 |
//! | GET | `/api/wallet/balances` | 지갑 잔고 |
//! | GET | `/`, `/index.html` | 정적 HTML 페이지 |
//!
//! OPTIONS 요청은 라우팅 전에 CORS 레이어가 응답합니다 ([`crate::server`]).
//! 그 밖의 조합은 모두 404입니다.

pub mod auth;
pub mod frontend;
pub mod health;
pub mod market;
pub mod trading;
pub mod wallet;

pub use auth::{auth_router, LoginResponse};
pub use frontend::{frontend_router, INDEX_HTML};
pub use health::{health_router, HealthResponse};
pub use market::market_router;
pub use trading::trading_router;
pub use wallet::wallet_router;

use axum::{
    http::{Method, Uri},
    response::IntoResponse,
    Router,
};
use std::sync::Arc;
use tracing::debug;

use crate::error::not_found;
use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 도메인별 라우터를 합쳐 하나의 라우팅 테이블로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health_router())
        .merge(auth_router())
        .merge(trading_router())
        .merge(market_router())
        .merge(wallet_router())
        .merge(frontend_router())
        // 경로는 등록되어 있지만 메서드가 다른 경우에도 405가 아닌 404
        .method_not_allowed_fallback(route_not_found)
        .fallback(route_not_found)
}

/// 등록되지 않은 메서드+경로.
async fn route_not_found(method: Method, uri: Uri) -> impl IntoResponse {
    debug!(%method, path = %uri.path(), "No route matched");
    not_found(&method, &uri)
}
