//! 거래쌍 endpoint.
//!
//! - `GET /api/trading/pairs` - 거래쌍 목록 (저장소 순서 그대로)

use axum::{extract::State, routing::get, Json, Router};
use flowex_core::TradingPair;
use std::sync::Arc;

use crate::state::AppState;

/// 거래쌍 목록 조회.
///
/// GET /api/trading/pairs
pub async fn list_pairs(State(state): State<Arc<AppState>>) -> Json<Vec<TradingPair>> {
    Json(state.store.trading_pairs().to_vec())
}

/// 거래쌍 라우터 생성.
pub fn trading_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/trading/pairs", get(list_pairs))
}
