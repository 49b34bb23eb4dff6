//! 통합 API 에러 응답 타입.
//!
//! 2xx가 아닌 모든 JSON 응답은 이 형식을 사용합니다.
//! 메시지에는 스택 트레이스나 내부 상태를 담지 않습니다.

use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 통합 API 에러 응답.
///
/// # 예시
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Endpoint not found",
///   "timestamp": 1738300800,
///   "method": "GET",
///   "path": "/api/unknown"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "NOT_FOUND", "INVALID_JSON")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 추가 에러 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// 에러 발생 타임스탬프 (Unix timestamp, 선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// HTTP 메서드 (GET, POST 등)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// 요청 경로
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ApiErrorResponse {
    /// 기본 에러 생성 (타임스탬프 포함).
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            timestamp: Some(chrono::Utc::now().timestamp()),
            method: None,
            path: None,
        }
    }

    /// 상세 정보 포함 에러 생성.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            details: Some(details),
            ..Self::new(code, message)
        }
    }

    /// 요청 정보(메서드, 경로)를 추가합니다. 쿼리 문자열은 제외됩니다.
    #[must_use]
    pub fn with_request_info(mut self, method: &Method, uri: &Uri) -> Self {
        self.method = Some(method.to_string());
        self.path = Some(uri.path().to_string());
        self
    }

    /// 상태 코드와 묶어 핸들러 에러로 변환합니다.
    pub fn into_rejection(self, status: StatusCode) -> (StatusCode, Json<ApiErrorResponse>) {
        (status, Json(self))
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

// ==================== 공통 에러 생성자 ====================

/// 404 - 등록되지 않은 메서드+경로.
pub fn not_found(method: &Method, uri: &Uri) -> (StatusCode, Json<ApiErrorResponse>) {
    ApiErrorResponse::new("NOT_FOUND", "Endpoint not found")
        .with_request_info(method, uri)
        .into_rejection(StatusCode::NOT_FOUND)
}

/// 500 - 응답 생성 중 예기치 않은 실패.
pub fn internal_error() -> (StatusCode, Json<ApiErrorResponse>) {
    ApiErrorResponse::new("INTERNAL_ERROR", "Internal server error")
        .into_rejection(StatusCode::INTERNAL_SERVER_ERROR)
}

// ==================== Result Type Alias ====================

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;
