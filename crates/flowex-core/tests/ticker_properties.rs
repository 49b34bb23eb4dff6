//! 티커 합성기 속성 테스트
//!
//! 임의 시드와 설정값에 대해 합성 결과가 설정한 범위를 벗어나지 않는지 확인

use flowex_core::{MarketConfig, MockStore, TickerSynthesizer};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

proptest! {
    #[test]
    fn price_within_bound_of_base(seed in any::<u64>(), bound in 0u32..500) {
        let config = MarketConfig {
            perturbation_bound: Decimal::from(bound),
            ..Default::default()
        };
        let synth = TickerSynthesizer::new(&config);
        let store = MockStore::default();
        let mut rng = StdRng::seed_from_u64(seed);

        let tickers = synth.synthesize_all_with(store.trading_pairs(), &mut rng);
        prop_assert_eq!(tickers.len(), store.trading_pairs().len());

        for (pair, ticker) in store.trading_pairs().iter().zip(&tickers) {
            let base = synth.base_price(pair);
            prop_assert_eq!(&ticker.symbol, &pair.symbol);
            prop_assert!((ticker.price - base).abs() <= Decimal::from(bound));
            prop_assert!(ticker.low >= Decimal::ZERO);
        }
    }

    #[test]
    fn rendered_fields_have_fixed_digits(seed in any::<u64>()) {
        let synth = TickerSynthesizer::default();
        let store = MockStore::default();
        let mut rng = StdRng::seed_from_u64(seed);

        let tickers = synth.synthesize_all_with(store.trading_pairs(), &mut rng);
        let json = serde_json::to_value(&tickers).unwrap();

        for entry in json.as_array().unwrap() {
            for (field, digits) in [
                ("price", 2),
                ("change", 2),
                ("changePercent", 2),
                ("volume", 5),
                ("high", 2),
                ("low", 2),
            ] {
                let value = entry[field].as_str().unwrap();
                let (_, fraction) = value.split_once('.').unwrap();
                prop_assert_eq!(fraction.len(), digits);
            }
        }
    }
}
