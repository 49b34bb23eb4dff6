//! 모의 인증.
//!
//! 단일 데모 자격증명만 허용하고, 발급 시각을 담은 불투명 토큰을 돌려줍니다.
//! 발급된 토큰은 어디에도 기록되지 않으며 이후 요청에서 검증하지 않습니다.
//!
//! # 구성 요소
//!
//! - [`AuthStub`]: 요청 본문 파싱과 자격증명 비교
//! - [`LoginRequest`]: 로그인 요청 본문
//! - [`issue_token`]: 타임스탬프 기반 토큰 생성

mod stub;
mod token;

pub use stub::{AuthStub, LoginRequest};
pub use token::{issue_token, IssuedToken};
