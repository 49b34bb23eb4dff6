//! # FlowEx Core
//!
//! FlowEx 모의 거래소 백엔드의 핵심 도메인 모델 및 인프라를 제공합니다.
//!
//! 이 크레이트는 API 서버 전반에서 사용되는 기본 타입을 제공합니다:
//! - 모의 도메인 저장소 (데모 사용자, 거래쌍, 지갑 잔고)
//! - 티커 합성기 (기준가 + 무작위 변동)
//! - 고정 소수점 문자열 직렬화
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
