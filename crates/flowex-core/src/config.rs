//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! 모든 섹션은 `#[serde(default)]`이므로 설정 파일이 없어도 기본값으로 동작합니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{FlowExError, FlowExResult};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 티커 합성 설정
    pub market: MarketConfig,
    /// 모의 인증 설정
    pub auth: AuthConfig,
    /// 메트릭 설정
    pub metrics: MetricsConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 헬스 체크 응답에 표시되는 서비스 이름
    pub service_name: String,
    /// 요청 처리 타임아웃 (초)
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            service_name: "flowex-backend".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 티커 합성 설정.
///
/// 기준가는 거래쌍의 기초 자산 코드로 조회하며, 없으면 `default_base_price`를 사용합니다.
///
/// `config` 크레이트는 테이블 키를 소문자로 읽으므로 [`AppConfig::load`]가
/// `base_prices`의 자산 코드를 대문자로 되돌립니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketConfig {
    /// 목록에 없는 자산의 기준가
    pub default_base_price: Decimal,
    /// 자산 코드별 기준가 (예: BTC → 45000)
    pub base_prices: HashMap<String, Decimal>,
    /// 가격 변동 한계 (±)
    pub perturbation_bound: Decimal,
    /// 거래량 하한
    pub volume_min: Decimal,
    /// 거래량 상한
    pub volume_max: Decimal,
    /// 고가/저가가 기준가에서 벌어질 수 있는 최대 폭
    pub range_spread: Decimal,
}

impl Default for MarketConfig {
    fn default() -> Self {
        let mut base_prices = HashMap::new();
        base_prices.insert("BTC".to_string(), dec!(45000));
        base_prices.insert("ETH".to_string(), dec!(3000));

        Self {
            default_base_price: dec!(300),
            base_prices,
            perturbation_bound: dec!(5),
            volume_min: dec!(100),
            volume_max: dec!(1000),
            range_spread: dec!(1000),
        }
    }
}

impl MarketConfig {
    /// 자산 코드를 대문자로 정규화합니다.
    fn normalize_asset_codes(&mut self) {
        self.base_prices = std::mem::take(&mut self.base_prices)
            .into_iter()
            .map(|(asset, price)| (asset.to_uppercase(), price))
            .collect();
    }

    /// 설정값의 유효성을 검사합니다.
    pub fn validate(&self) -> FlowExResult<()> {
        if self.default_base_price <= Decimal::ZERO {
            return Err(FlowExError::Config(
                "market.default_base_price must be positive".to_string(),
            ));
        }
        if let Some((asset, price)) = self.base_prices.iter().find(|(_, p)| **p <= Decimal::ZERO) {
            return Err(FlowExError::Config(format!(
                "market.base_prices.{} must be positive, got {}",
                asset, price
            )));
        }
        if self.perturbation_bound < Decimal::ZERO {
            return Err(FlowExError::Config(
                "market.perturbation_bound must not be negative".to_string(),
            ));
        }
        if self.volume_min <= Decimal::ZERO || self.volume_min >= self.volume_max {
            return Err(FlowExError::Config(format!(
                "market volume range must satisfy 0 < min < max, got [{}, {}]",
                self.volume_min, self.volume_max
            )));
        }
        if self.range_spread < Decimal::ZERO {
            return Err(FlowExError::Config(
                "market.range_spread must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// 모의 인증 설정.
///
/// 데모 이메일은 모의 저장소의 사용자 레코드가 소유합니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// 데모 계정 비밀번호
    pub demo_password: String,
    /// 발급 토큰 접두사 (뒤에 Unix 타임스탬프가 붙음)
    pub token_prefix: String,
    /// 로그인 응답의 만료 힌트 (초)
    pub expires_in_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_password: "demo123".to_string(),
            token_prefix: "mock_jwt_token_".to_string(),
            expires_in_secs: 3600,
        }
    }
}

/// 메트릭 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Prometheus exporter 활성화 여부
    pub enabled: bool,
    /// exporter 리스닝 주소 (API 포트와 별도)
    pub listen_addr: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            listen_addr: "0.0.0.0:9100".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 건너뛰고, `FLOWEX__SERVER__PORT=9000` 형식의
    /// 환경 변수가 파일 값을 덮어씁니다.
    pub fn load<P: AsRef<Path>>(path: P) -> FlowExResult<Self> {
        let builder = config::Config::builder()
            // 파일에서 로드 (선택)
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("FLOWEX")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.market.normalize_asset_codes();
        config.validate()?;
        Ok(config)
    }

    /// 전체 설정의 유효성을 검사합니다.
    pub fn validate(&self) -> FlowExResult<()> {
        if self.server.port == 0 {
            return Err(FlowExError::Config("server.port must not be 0".to_string()));
        }
        self.market.validate()
    }
}
