//! 모의 토큰 발급.

use chrono::{DateTime, Utc};

/// 발급된 토큰과 만료 힌트.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// 불투명 토큰 문자열
    pub token: String,
    /// 만료 힌트 (초). 서버는 만료를 강제하지 않습니다.
    pub expires_in: u64,
}

/// `prefix` 뒤에 발급 시각의 Unix 초를 붙인 토큰을 만듭니다.
///
/// 같은 초에 발급된 토큰은 서로 같습니다.
pub fn issue_token(prefix: &str, issued_at: DateTime<Utc>, expires_in: u64) -> IssuedToken {
    IssuedToken {
        token: format!("{}{}", prefix, issued_at.timestamp()),
        expires_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_token_embeds_issue_time() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let issued = issue_token("mock_jwt_token_", issued_at, 3600);

        assert_eq!(issued.token, "mock_jwt_token_1705314600");
        assert_eq!(issued.expires_in, 3600);
    }
}
