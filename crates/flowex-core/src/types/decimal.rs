//! 고정 소수점 문자열 표현을 위한 Decimal 유틸리티.
//!
//! 응답 JSON의 모든 금액/가격 필드는 문자열로 직렬화되며, 필드마다 소수점
//! 자릿수가 고정됩니다. 이진 부동소수점 표현 오차가 출력에 섞이지 않도록
//! 내부적으로는 [`Decimal`]을 사용합니다.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serializer};

/// 금융 정밀도를 위한 가격 타입.
pub type Price = Decimal;

/// 수량/잔고 타입.
pub type Quantity = Decimal;

/// 지정된 소수점 자릿수로 반올림합니다 (0.5는 0에서 먼 쪽으로).
#[inline]
pub fn round_fixed(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// 정확히 `dp`자리 소수를 가진 문자열로 변환합니다.
///
/// # 예제
///
/// ```
/// use rust_decimal_macros::dec;
/// use flowex_core::format_fixed;
///
/// assert_eq!(format_fixed(dec!(1000), 8), "1000.00000000");
/// assert_eq!(format_fixed(dec!(45002.345), 2), "45002.35");
/// assert_eq!(format_fixed(dec!(-0.004), 2), "0.00");
/// ```
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = round_fixed(value, dp);
    // "-0.00" 출력 방지
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(dp);
    rounded.to_string()
}

fn deserialize_decimal_str<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<Decimal>().map_err(serde::de::Error::custom)
}

macro_rules! fixed_dp_module {
    ($(#[$meta:meta])* $name:ident, $dp:expr) => {
        $(#[$meta])*
        pub mod $name {
            use super::*;

            /// 소수점 자릿수.
            pub const DECIMAL_PLACES: u32 = $dp;

            /// 고정 자릿수 문자열로 직렬화합니다.
            pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&format_fixed(*value, DECIMAL_PLACES))
            }

            /// 10진 문자열에서 역직렬화합니다.
            pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserialize_decimal_str(deserializer)
            }
        }
    };
}

fixed_dp_module!(
    /// 소수점 2자리 문자열 (`#[serde(with = "fixed2")]`): 가격, 변동, 고가/저가.
    fixed2,
    2
);
fixed_dp_module!(
    /// 소수점 5자리 문자열 (`#[serde(with = "fixed5")]`): 거래량.
    fixed5,
    5
);
fixed_dp_module!(
    /// 소수점 8자리 문자열 (`#[serde(with = "fixed8")]`): 지갑 잔고.
    fixed8,
    8
);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        #[serde(with = "fixed2")]
        price: Decimal,
        #[serde(with = "fixed8")]
        amount: Decimal,
    }

    #[test]
    fn test_format_fixed_pads_and_rounds() {
        assert_eq!(format_fixed(dec!(0), 8), "0.00000000");
        assert_eq!(format_fixed(dec!(0.12345678), 8), "0.12345678");
        assert_eq!(format_fixed(dec!(10.5), 8), "10.50000000");
        assert_eq!(format_fixed(dec!(2.005), 2), "2.01");
        assert_eq!(format_fixed(dec!(-2.005), 2), "-2.01");
        assert_eq!(format_fixed(dec!(123.456789), 5), "123.45679");
    }

    #[test]
    fn test_format_fixed_never_negative_zero() {
        assert_eq!(format_fixed(dec!(-0.001), 2), "0.00");
    }

    #[test]
    fn test_fixed_serde_shape() {
        let sample = Sample {
            price: dec!(45001.2),
            amount: dec!(1000),
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"price":"45001.20","amount":"1000.00000000"}"#);

        let parsed: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.price, dec!(45001.20));
        assert_eq!(parsed.amount, dec!(1000));
    }

    #[test]
    fn test_fixed_rejects_non_numeric_string() {
        let result = serde_json::from_str::<Sample>(r#"{"price":"abc","amount":"1"}"#);
        assert!(result.is_err());
    }
}
