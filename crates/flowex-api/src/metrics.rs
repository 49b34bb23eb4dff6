//! Prometheus 메트릭 설정 및 유틸리티.
//!
//! HTTP 요청 메트릭과 도메인 메트릭을 수집합니다. exporter는 API 라우팅
//! 테이블을 건드리지 않도록 별도 주소에서 리스닝합니다. 레코더가 설치되지
//! 않은 경우(테스트, 메트릭 비활성화) 모든 기록 함수는 아무 일도 하지 않습니다.

use std::net::SocketAddr;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};

/// 라우트 템플릿이 없는 요청(fallback)의 path 라벨.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Prometheus exporter를 `listen_addr`에 설치합니다.
///
/// tokio 런타임 안에서 호출해야 합니다.
pub fn install_metrics_exporter(listen_addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        // HTTP 요청 지속 시간 히스토그램 버킷 설정
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0],
        )?
        .with_http_listener(listen_addr)
        .install()
}

// ============================================================================
// HTTP 메트릭 헬퍼 함수
// ============================================================================

/// HTTP 요청 카운터 증가.
pub fn record_http_request(method: &str, path: &str) {
    counter!("http_requests_total", "method" => method.to_string(), "path" => path.to_string())
        .increment(1);
}

/// HTTP 응답 카운터 증가.
pub fn record_http_response(method: &str, path: &str, status: u16) {
    counter!(
        "http_responses_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// HTTP 요청 지속 시간 기록.
pub fn record_http_duration(method: &str, path: &str, duration_secs: f64) {
    histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_secs);
}

// ============================================================================
// 도메인 메트릭 헬퍼 함수
// ============================================================================

/// 로그인 시도 카운터 증가 (outcome: success | rejected | malformed).
pub fn record_login_attempt(outcome: &'static str) {
    counter!("auth_login_attempts_total", "outcome" => outcome).increment(1);
}

/// 합성된 티커 수 누적.
pub fn record_tickers_synthesized(count: usize) {
    counter!("market_tickers_synthesized_total").increment(count as u64);
}

/// 메트릭 path 라벨 결정.
///
/// 등록된 라우트 템플릿이 있으면 그대로 쓰고, 없으면 [`UNMATCHED_PATH`]로 묶어
/// 임의 경로가 라벨 카디널리티를 늘리지 않게 합니다.
pub fn path_label(matched: Option<&str>) -> &str {
    matched.unwrap_or(UNMATCHED_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_label() {
        assert_eq!(path_label(Some("/api/trading/pairs")), "/api/trading/pairs");
        assert_eq!(path_label(None), UNMATCHED_PATH);
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_http_request("GET", "/health");
        record_http_response("GET", "/health", 200);
        record_http_duration("GET", "/health", 0.001);
        record_login_attempt("success");
        record_tickers_synthesized(3);
    }
}
