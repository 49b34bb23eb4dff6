//! 모의 로그인 endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /api/auth/login` - 데모 자격증명 확인 후 토큰 발급
//!
//! # 응답
//!
//! - 200: `{token, user, expiresIn}`
//! - 400: 본문이 JSON 객체가 아님
//! - 401: 자격증명 불일치

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use flowex_core::{FlowExError, User};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::{internal_error, ApiErrorResponse, ApiResult};
use crate::metrics::record_login_attempt;
use crate::state::AppState;

// ==================== 응답 타입 ====================

/// 로그인 성공 응답.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// 불투명 토큰
    pub token: String,
    /// 로그인한 사용자
    pub user: User,
    /// 만료 힌트 (초)
    pub expires_in: u64,
}

/// 로그인 실패를 HTTP 응답으로 변환합니다.
///
/// 파싱 실패는 원인을 `details.reason`에 담아 400, 자격증명 불일치는 401입니다.
/// 클라이언트 에러가 아닌 경우는 내용을 숨기고 500으로 응답합니다.
fn login_rejection(err: FlowExError) -> (StatusCode, Json<ApiErrorResponse>) {
    match err {
        FlowExError::InvalidInput(reason) => ApiErrorResponse::with_details(
            "INVALID_JSON",
            "Invalid JSON",
            serde_json::json!({ "reason": reason }),
        )
        .into_rejection(StatusCode::BAD_REQUEST),
        FlowExError::Auth(_) => ApiErrorResponse::new("INVALID_CREDENTIALS", "Invalid credentials")
            .into_rejection(StatusCode::UNAUTHORIZED),
        FlowExError::Config(_) => internal_error(),
    }
}

// ==================== Handler ====================

/// 로그인.
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<LoginResponse>> {
    let demo_user = state.store.demo_user();

    let issued = state
        .auth
        .parse_request(&body)
        .and_then(|request| state.auth.authenticate(&request, demo_user))
        .map_err(|err| {
            let outcome = match err {
                FlowExError::InvalidInput(_) => "malformed",
                _ => "rejected",
            };
            record_login_attempt(outcome);

            if err.is_client_error() {
                warn!(error = %err, outcome, "Login rejected");
            } else {
                error!(error = %err, "Login failed");
            }
            login_rejection(err)
        })?;

    info!(user_id = %demo_user.id, "Demo login succeeded");
    record_login_attempt("success");

    Ok(Json(LoginResponse {
        token: issued.token,
        user: demo_user.clone(),
        expires_in: issued.expires_in,
    }))
}

/// 인증 라우터 생성.
pub fn auth_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/auth/login", post(login))
}
