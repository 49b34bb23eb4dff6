//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 시작 시 한 번 생성되어 Arc로 공유되며, 이후 변경되지 않습니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use flowex_core::{AppConfig, MockStore, TickerSynthesizer};

use crate::auth::AuthStub;

/// 애플리케이션 공유 상태.
///
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
/// 가변 필드가 없으므로 동시 요청 사이에 잠금이 필요 없습니다.
#[derive(Debug, Clone)]
pub struct AppState {
    /// 모의 도메인 저장소 (사용자, 거래쌍, 잔고)
    pub store: Arc<MockStore>,

    /// 티커 합성기
    pub synthesizer: TickerSynthesizer,

    /// 모의 인증 스텁
    pub auth: AuthStub,

    /// 헬스 체크에 표시되는 서비스 이름
    pub service_name: String,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: DateTime<Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 설정으로부터 AppState를 생성합니다.
    pub fn new(config: &AppConfig) -> Self {
        let started_at = Utc::now();

        Self {
            store: Arc::new(MockStore::demo(started_at)),
            synthesizer: TickerSynthesizer::new(&config.market),
            auth: AuthStub::new(&config.auth),
            service_name: config.server.service_name.clone(),
            started_at,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 서버 업타임 (초).
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds().max(0)
    }
}

/// 테스트용 AppState 생성 (기본 설정).
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    AppState::new(&AppConfig::default())
}
