//! 헬스 체크 endpoint.
//!
//! 외부 테스트 하네스와 UI가 서버 생존 여부를 확인하는 데 사용합니다.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

/// 헬스 체크의 정상 상태 값.
pub const HEALTHY: &str = "healthy";

/// 헬스 체크 응답 구조체.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 서비스 상태 (항상 "healthy")
    pub status: String,

    /// 서비스 이름
    pub service: String,

    /// 현재 시간 (ISO 8601)
    pub timestamp: String,

    /// API 버전
    pub version: String,

    /// 서버 업타임(초)
    pub uptime: i64,
}

/// 헬스 체크 (liveness probe용).
///
/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY.to_string(),
        service: state.service_name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime: state.uptime_secs(),
    })
}

/// 헬스 체크 라우터 생성.
pub fn health_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}
