//! 지갑 잔고.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{fixed8, Quantity};

/// 통화별 지갑 잔고.
///
/// 금액은 항상 소수점 8자리 문자열로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBalance {
    /// 통화 코드
    pub currency: String,
    /// 사용 가능 금액
    #[serde(with = "fixed8")]
    pub available: Quantity,
    /// 주문 등으로 묶인 금액
    #[serde(with = "fixed8")]
    pub locked: Quantity,
}

impl WalletBalance {
    /// 새 잔고를 생성합니다.
    pub fn new(currency: impl Into<String>, available: Decimal, locked: Decimal) -> Self {
        Self {
            currency: currency.into().to_uppercase(),
            available,
            locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balance_renders_eight_digits() {
        let balance = WalletBalance::new("usdt", dec!(1000), dec!(50));
        let json = serde_json::to_value(&balance).unwrap();
        assert_eq!(json["currency"], "USDT");
        assert_eq!(json["available"], "1000.00000000");
        assert_eq!(json["locked"], "50.00000000");
    }
}
