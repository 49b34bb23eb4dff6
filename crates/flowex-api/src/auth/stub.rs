//! 자격증명 확인 스텁.

use chrono::Utc;
use flowex_core::{AuthConfig, FlowExError, FlowExResult, User};
use serde::Deserialize;

use super::token::{issue_token, IssuedToken};

/// 로그인 요청 본문.
///
/// 누락된 필드는 빈 문자열로 취급되어 자격증명 불일치(401)가 됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    /// 이메일
    #[serde(default)]
    pub email: String,
    /// 비밀번호
    #[serde(default)]
    pub password: String,
}

/// 단일 데모 자격증명을 확인하는 모의 인증기.
///
/// 속도 제한, 잠금, 타이밍 안전 비교를 하지 않습니다.
#[derive(Debug, Clone)]
pub struct AuthStub {
    demo_password: String,
    token_prefix: String,
    expires_in_secs: u64,
}

impl AuthStub {
    /// 설정으로부터 생성합니다.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            demo_password: config.demo_password.clone(),
            token_prefix: config.token_prefix.clone(),
            expires_in_secs: config.expires_in_secs,
        }
    }

    /// 원시 요청 본문을 파싱합니다. Content-Type은 확인하지 않습니다.
    ///
    /// 최상위 값은 객체여야 합니다. 배열은 필드 기본값으로 채워지지 않습니다.
    /// 파싱 실패는 [`FlowExError::InvalidInput`] (400)입니다.
    pub fn parse_request(&self, body: &[u8]) -> FlowExResult<LoginRequest> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| FlowExError::InvalidInput(e.to_string()))?;
        if !value.is_object() {
            return Err(FlowExError::InvalidInput(
                "expected a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| FlowExError::InvalidInput(e.to_string()))
    }

    /// 자격증명이 데모 사용자와 정확히 일치하면 토큰을 발급합니다.
    /// 불일치는 [`FlowExError::Auth`] (401)입니다.
    pub fn authenticate(
        &self,
        request: &LoginRequest,
        demo_user: &User,
    ) -> FlowExResult<IssuedToken> {
        if request.email != demo_user.email || request.password != self.demo_password {
            return Err(FlowExError::Auth(format!(
                "credentials rejected for {:?}",
                request.email
            )));
        }
        Ok(issue_token(&self.token_prefix, Utc::now(), self.expires_in_secs))
    }
}
