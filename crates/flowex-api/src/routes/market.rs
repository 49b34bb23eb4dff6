//! 시장 데이터 endpoint.
//!
//! - `GET /api/market-data/tickers` - 거래쌍별 합성 티커
//!
//! 티커는 요청마다 새 난수로 계산하며 캐시하지 않습니다.

use axum::{extract::State, routing::get, Json, Router};
use flowex_core::Ticker;
use std::sync::Arc;

use crate::metrics::record_tickers_synthesized;
use crate::state::AppState;

/// 합성 티커 목록 조회.
///
/// GET /api/market-data/tickers
pub async fn list_tickers(State(state): State<Arc<AppState>>) -> Json<Vec<Ticker>> {
    // 요청마다 스레드 로컬 생성기 사용 (핸들러 간 공유 가변 상태 없음)
    let tickers = state.synthesizer.synthesize_all(state.store.trading_pairs());
    record_tickers_synthesized(tickers.len());
    Json(tickers)
}

/// 시장 데이터 라우터 생성.
pub fn market_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/market-data/tickers", get(list_tickers))
}
