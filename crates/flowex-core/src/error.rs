//! FlowEx 시스템의 에러 타입.
//!
//! 설정 로드와 로그인 요청 처리에서 발생하는 에러를 정의합니다.

use thiserror::Error;

/// 핵심 FlowEx 에러.
#[derive(Debug, Error)]
pub enum FlowExError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력 (파싱할 수 없는 요청 본문)
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 인증 에러 (자격증명 불일치)
    #[error("인증 에러: {0}")]
    Auth(String),
}

/// FlowEx 작업을 위한 Result 타입.
pub type FlowExResult<T> = Result<T, FlowExError>;

impl FlowExError {
    /// 클라이언트 요청 때문에 발생한 에러인지 확인합니다.
    pub fn is_client_error(&self) -> bool {
        matches!(self, FlowExError::InvalidInput(_) | FlowExError::Auth(_))
    }
}

impl From<config::ConfigError> for FlowExError {
    fn from(err: config::ConfigError) -> Self {
        FlowExError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(FlowExError::InvalidInput("bad body".to_string()).is_client_error());
        assert!(FlowExError::Auth("wrong password".to_string()).is_client_error());
        assert!(!FlowExError::Config("port".to_string()).is_client_error());
    }

    #[test]
    fn test_from_config_error() {
        let err = config::ConfigError::Message("missing key".to_string());
        let converted: FlowExError = err.into();
        assert!(matches!(converted, FlowExError::Config(ref m) if m.contains("missing key")));
    }
}
