//! 거래쌍 메타데이터.

use serde::{Deserialize, Serialize};

/// 거래쌍 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PairStatus {
    /// 거래 가능
    Trading,
}

/// 거래쌍 (예: BTC-USDT).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPair {
    /// 심볼 ("BASE-QUOTE")
    pub symbol: String,
    /// 기초 자산 코드
    pub base_asset: String,
    /// 호가 자산 코드
    pub quote_asset: String,
    /// 상태
    pub status: PairStatus,
}

impl TradingPair {
    /// 거래 가능한 거래쌍을 생성합니다. 심볼은 `BASE-QUOTE` 형식으로 조합됩니다.
    pub fn trading(base_asset: impl Into<String>, quote_asset: impl Into<String>) -> Self {
        let base_asset = base_asset.into().to_uppercase();
        let quote_asset = quote_asset.into().to_uppercase();
        Self {
            symbol: format!("{}-{}", base_asset, quote_asset),
            base_asset,
            quote_asset,
            status: PairStatus::Trading,
        }
    }
}
