//! 지갑 잔고 endpoint.
//!
//! - `GET /api/wallet/balances` - 통화별 잔고 (금액은 소수점 8자리 문자열)

use axum::{extract::State, routing::get, Json, Router};
use flowex_core::WalletBalance;
use std::sync::Arc;

use crate::state::AppState;

/// 지갑 잔고 조회.
///
/// GET /api/wallet/balances
pub async fn list_balances(State(state): State<Arc<AppState>>) -> Json<Vec<WalletBalance>> {
    Json(state.store.balances().to_vec())
}

/// 지갑 라우터 생성.
pub fn wallet_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/wallet/balances", get(list_balances))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_test_state;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_balances_have_eight_fraction_digits() {
        let app = wallet_router().with_state(Arc::new(create_test_state()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/wallet/balances")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let balances: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let balances = balances.as_array().unwrap();

        assert_eq!(balances.len(), 4);
        assert_eq!(balances[2]["currency"], "USDT");
        assert_eq!(balances[2]["available"], "1000.00000000");
        assert_eq!(balances[2]["locked"], "50.00000000");
    }
}
