//! 티커 합성기.
//!
//! 실제 시세 피드 없이 거래쌍마다 그럴듯한 시세 스냅샷을 만들어냅니다.
//! 요청마다 새로 계산하며 캐시하지 않습니다.
//!
//! 기준가(base)와 각 필드별 독립 난수로 다음을 계산합니다:
//! - price = base + p, p ~ U[-bound, bound]
//! - change = p
//! - changePercent = p / base × 100
//! - volume ~ U[volume_min, volume_max]
//! - high = base + U[0, spread]
//! - low = max(0, base − U[0, spread])
//!
//! high/low는 price와 별도로 뽑으므로 `low < price < high`가 보장되지 않습니다.

use std::collections::HashMap;

use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TradingPair;
use crate::config::MarketConfig;
use crate::types::{fixed2, fixed5, round_fixed, Price, Quantity};

/// 합성된 시세 스냅샷. 저장되지 않는 파생 값입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// 거래쌍 심볼
    pub symbol: String,
    /// 현재가
    #[serde(with = "fixed2")]
    pub price: Price,
    /// 기준가 대비 변동
    #[serde(with = "fixed2")]
    pub change: Price,
    /// 기준가 대비 변동률 (%)
    #[serde(with = "fixed2")]
    pub change_percent: Decimal,
    /// 거래량
    #[serde(with = "fixed5")]
    pub volume: Quantity,
    /// 고가
    #[serde(with = "fixed2")]
    pub high: Price,
    /// 저가
    #[serde(with = "fixed2")]
    pub low: Price,
}

/// 기준가 + 유계 난수 변동으로 티커를 만드는 합성기.
///
/// 불변 설정만 보유하므로 여러 핸들러에서 동시에 공유해도 안전합니다.
/// 난수 생성기는 호출자가 요청마다 넘깁니다.
#[derive(Debug, Clone)]
pub struct TickerSynthesizer {
    base_prices: HashMap<String, Price>,
    default_base_price: Price,
    perturbation_bound: Decimal,
    volume_min: Quantity,
    volume_max: Quantity,
    range_spread: Decimal,
}

impl Default for TickerSynthesizer {
    fn default() -> Self {
        Self::new(&MarketConfig::default())
    }
}

impl TickerSynthesizer {
    /// 설정으로부터 합성기를 생성합니다. 자산 코드는 대문자로 정규화됩니다.
    pub fn new(config: &MarketConfig) -> Self {
        Self {
            base_prices: config
                .base_prices
                .iter()
                .map(|(asset, price)| (asset.to_uppercase(), *price))
                .collect(),
            default_base_price: config.default_base_price,
            perturbation_bound: config.perturbation_bound.abs(),
            volume_min: config.volume_min,
            volume_max: config.volume_max,
            range_spread: config.range_spread.abs(),
        }
    }

    /// 거래쌍의 기준가를 기초 자산 코드로 조회합니다.
    pub fn base_price(&self, pair: &TradingPair) -> Price {
        self.base_prices
            .get(&pair.base_asset.to_uppercase())
            .copied()
            .unwrap_or(self.default_base_price)
    }

    /// 거래쌍 하나의 티커를 합성합니다.
    pub fn synthesize<R: Rng + ?Sized>(&self, pair: &TradingPair, rng: &mut R) -> Ticker {
        let base = self.base_price(pair);
        let bound = self.perturbation_bound;

        // 반올림 후에도 ±bound를 벗어나지 않도록 고정
        let perturbation =
            round_fixed(draw(rng, -bound, bound), fixed2::DECIMAL_PLACES).clamp(-bound, bound);

        let change_percent = if base.is_zero() {
            Decimal::ZERO
        } else {
            perturbation / base * Decimal::ONE_HUNDRED
        };

        let volume = draw(rng, self.volume_min, self.volume_max);
        let high = base + draw(rng, Decimal::ZERO, self.range_spread);
        let low = (base - draw(rng, Decimal::ZERO, self.range_spread)).max(Decimal::ZERO);

        debug!(symbol = %pair.symbol, %base, %perturbation, "Ticker synthesized");

        Ticker {
            symbol: pair.symbol.clone(),
            price: base + perturbation,
            change: perturbation,
            change_percent: round_fixed(change_percent, fixed2::DECIMAL_PLACES),
            volume: round_fixed(volume, fixed5::DECIMAL_PLACES),
            high: round_fixed(high, fixed2::DECIMAL_PLACES),
            low: round_fixed(low, fixed2::DECIMAL_PLACES),
        }
    }

    /// 주어진 생성기로 모든 거래쌍의 티커를 순서대로 합성합니다.
    pub fn synthesize_all_with<R: Rng + ?Sized>(
        &self,
        pairs: &[TradingPair],
        rng: &mut R,
    ) -> Vec<Ticker> {
        pairs.iter().map(|pair| self.synthesize(pair, rng)).collect()
    }

    /// 스레드 로컬 생성기로 모든 거래쌍의 티커를 합성합니다.
    pub fn synthesize_all(&self, pairs: &[TradingPair]) -> Vec<Ticker> {
        self.synthesize_all_with(pairs, &mut rand::thread_rng())
    }
}

/// `[low, high]` 구간에서 균등 분포로 하나를 뽑습니다.
fn draw<R: Rng + ?Sized>(rng: &mut R, low: Decimal, high: Decimal) -> Decimal {
    if low >= high {
        return low;
    }
    let (Some(lo), Some(hi)) = (low.to_f64(), high.to_f64()) else {
        return low;
    };
    Decimal::try_from(rng.gen_range(lo..=hi))
        .unwrap_or(low)
        .clamp(low, high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;

    fn pairs() -> Vec<TradingPair> {
        vec![
            TradingPair::trading("BTC", "USDT"),
            TradingPair::trading("ETH", "USDT"),
            TradingPair::trading("BNB", "USDT"),
        ]
    }

    #[test]
    fn test_base_price_lookup() {
        let synth = TickerSynthesizer::default();
        let pairs = pairs();
        assert_eq!(synth.base_price(&pairs[0]), dec!(45000));
        assert_eq!(synth.base_price(&pairs[1]), dec!(3000));
        assert_eq!(synth.base_price(&pairs[2]), dec!(300));
    }

    #[test]
    fn test_price_stays_within_bound() {
        let synth = TickerSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            for (pair, ticker) in pairs().iter().zip(synth.synthesize_all_with(&pairs(), &mut rng)) {
                let base = synth.base_price(pair);
                assert!((ticker.price - base).abs() <= dec!(5), "{:?}", ticker);
                assert_eq!(ticker.change, ticker.price - base);
                assert!(ticker.volume >= dec!(100) && ticker.volume <= dec!(1000));
                assert!(ticker.high >= base && ticker.high <= base + dec!(1000));
                assert!(ticker.low <= base && ticker.low >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_change_percent_matches_change() {
        let synth = TickerSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(42);
        let pair = TradingPair::trading("ETH", "USDT");
        let ticker = synth.synthesize(&pair, &mut rng);

        let expected = round_fixed(ticker.change / dec!(3000) * dec!(100), 2);
        assert_eq!(ticker.change_percent, expected);
    }

    #[test]
    fn test_low_never_negative_for_cheap_assets() {
        let synth = TickerSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(3);
        let pair = TradingPair::trading("BNB", "USDT");

        // 기준가 300, 폭 1000이므로 하한 고정이 자주 작동함
        assert!((0..1000)
            .map(|_| synth.synthesize(&pair, &mut rng))
            .all(|t| t.low >= Decimal::ZERO));
    }

    #[test]
    fn test_consecutive_draws_differ() {
        let synth = TickerSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(11);
        let pair = TradingPair::trading("BTC", "USDT");

        let prices: Vec<_> = (0..20).map(|_| synth.synthesize(&pair, &mut rng).price).collect();
        assert!(prices.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_zero_bound_pins_price_to_base() {
        let config = MarketConfig {
            perturbation_bound: dec!(0),
            ..Default::default()
        };
        let synth = TickerSynthesizer::new(&config);
        let ticker = synth.synthesize(&TradingPair::trading("BTC", "USDT"), &mut StdRng::seed_from_u64(1));
        assert_eq!(ticker.price, dec!(45000));
        assert_eq!(ticker.change_percent, Decimal::ZERO);
    }

    #[test]
    fn test_ticker_wire_format() {
        let ticker = Ticker {
            symbol: "BTC-USDT".to_string(),
            price: dec!(45003.1),
            change: dec!(3.1),
            change_percent: dec!(0.01),
            volume: dec!(512.5),
            high: dec!(45800),
            low: dec!(44210.55),
        };
        let json = serde_json::to_value(&ticker).unwrap();
        assert_eq!(json["price"], "45003.10");
        assert_eq!(json["change"], "3.10");
        assert_eq!(json["changePercent"], "0.01");
        assert_eq!(json["volume"], "512.50000");
        assert_eq!(json["high"], "45800.00");
        assert_eq!(json["low"], "44210.55");
    }
}
