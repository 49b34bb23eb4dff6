//! API 서버용 HTTP middleware.
//!
//! 요청 처리 파이프라인에 적용되는 middleware 모듈.

mod exact_method;
mod metrics;
mod request_log;

pub use exact_method::reject_head_layer;
pub use metrics::metrics_layer;
pub use request_log::{request_log_layer, REQUEST_ID_HEADER};
