//! 모의 도메인 저장소.
//!
//! 실제 사용자/계정/시장 데이터베이스를 대신하는 고정 데이터셋입니다.
//! 프로세스 시작 시 한 번 생성되고 이후 읽기 전용으로 공유되므로 잠금이 필요 없습니다.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use super::{TradingPair, User, WalletBalance};

/// 데모 계정 이메일.
pub const DEMO_EMAIL: &str = "demo@flowex.com";

/// 불변 모의 데이터셋.
///
/// 목록의 길이와 순서는 생성 이후 바뀌지 않으며, 순서가 곧 응답 순서입니다.
/// 필드를 노출하지 않고 읽기 전용 접근자만 제공합니다.
#[derive(Debug, Clone)]
pub struct MockStore {
    demo_user: User,
    trading_pairs: Vec<TradingPair>,
    balances: Vec<WalletBalance>,
}

impl MockStore {
    /// 데모 데이터셋을 생성합니다. 사용자 생성 시각은 `created_at`으로 고정됩니다.
    pub fn demo(created_at: DateTime<Utc>) -> Self {
        let demo_user = User {
            id: "1".to_string(),
            email: DEMO_EMAIL.to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            is_verified: true,
            created_at,
        };

        let trading_pairs = vec![
            TradingPair::trading("BTC", "USDT"),
            TradingPair::trading("ETH", "USDT"),
            TradingPair::trading("BNB", "USDT"),
        ];

        let balances = vec![
            WalletBalance::new("BTC", dec!(0.12345678), dec!(0)),
            WalletBalance::new("ETH", dec!(2.45678901), dec!(0.1)),
            WalletBalance::new("USDT", dec!(1000), dec!(50)),
            WalletBalance::new("BNB", dec!(10.5), dec!(0)),
        ];

        Self {
            demo_user,
            trading_pairs,
            balances,
        }
    }

    /// 데모 사용자.
    pub fn demo_user(&self) -> &User {
        &self.demo_user
    }

    /// 거래쌍 목록 (표시 순서).
    pub fn trading_pairs(&self) -> &[TradingPair] {
        &self.trading_pairs
    }

    /// 지갑 잔고 목록.
    pub fn balances(&self) -> &[WalletBalance] {
        &self.balances
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::demo(Utc::now())
    }
}
