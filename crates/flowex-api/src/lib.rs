//! FlowEx 모의 거래소 HTTP 서버.
//!
//! UI와 테스트 하네스를 위한 대역 백엔드입니다. 이 크레이트는 다음을 제공합니다:
//! - 메서드+경로 정확 일치 라우팅 (Axum `Router`)
//! - 모의 인증 (고정 자격증명, 검증하지 않는 토큰)
//! - 거래쌍/티커/지갑 잔고 JSON 응답
//! - CORS, 요청 로깅, 패닉 복구 미들웨어
//! - Prometheus 메트릭 (별도 포트)
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: 모의 인증 스텁
//! - [`server`]: 미들웨어가 적용된 전체 라우터
//! - [`middleware`]: HTTP 미들웨어
//! - [`metrics`]: Prometheus 메트릭 수집

pub mod auth;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use auth::AuthStub;
pub use error::{ApiErrorResponse, ApiResult};
pub use routes::*;
pub use server::create_router;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
