//! 데모 사용자.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 레코드.
///
/// 모의 저장소에는 데모 사용자 하나만 존재하며 프로세스 수명 동안 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 사용자 ID
    pub id: String,
    /// 이메일 (로그인 ID)
    pub email: String,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 이메일 인증 여부
    pub is_verified: bool,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
}
