//! Property-based parity checks over random market points.

use approx::assert_relative_eq;
use pricer_core::market_data::{MarketOverrides, MarketState};
use pricer_models::engine::Pricer;
use pricer_models::payoffs::{
    DigitalCall, DigitalPut, ReverseDigitalCall, ReverseDigitalPut, VanillaCall, VanillaPut,
};
use proptest::prelude::*;

/// Random market inside the region where every model is defined.
fn market_strategy() -> impl Strategy<Value = MarketState> {
    (
        0.05..5.0_f64,   // time to maturity
        -0.02..0.10_f64, // rate
        0.0..0.06_f64,   // yield
        0.05..0.8_f64,   // vol
        20.0..200.0_f64, // spot
    )
        .prop_map(|(expiry, rate, yield_, vol, spot)| {
            MarketState::builder()
                .maturity(expiry)
                .rate(rate)
                .yield_(yield_)
                .vol(vol)
                .spot(spot)
                .build()
                .unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_put_call_parity(market in market_strategy(), strike in 20.0..200.0_f64) {
        let none = MarketOverrides::default();
        let call = Pricer::new(market, VanillaCall::new(strike).unwrap());
        let put = Pricer::new(market, VanillaPut::new(strike).unwrap());

        let lhs = call.present_value(&none).unwrap() - put.present_value(&none).unwrap();
        let rhs = call.discount_factor(&none).unwrap() * (call.forward(&none).unwrap() - strike);
        assert_relative_eq!(lhs, rhs, epsilon = 1e-9, max_relative = 1e-9);
    }

    #[test]
    fn test_digital_parity(market in market_strategy(), strike in 20.0..200.0_f64) {
        let none = MarketOverrides::default();
        let call = Pricer::new(market, DigitalCall::new(strike).unwrap());
        let put = Pricer::new(market, DigitalPut::new(strike).unwrap());

        let total = call.present_value(&none).unwrap() + put.present_value(&none).unwrap();
        assert_relative_eq!(total, call.discount_factor(&none).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_reverse_digital_parity(market in market_strategy(), strike in 20.0..200.0_f64) {
        let none = MarketOverrides::default();
        let call = Pricer::new(market, ReverseDigitalCall::new(strike).unwrap());
        let put = Pricer::new(market, ReverseDigitalPut::new(strike).unwrap());

        let total = call.present_value(&none).unwrap() + put.present_value(&none).unwrap();
        let expected = call.discount_factor(&none).unwrap() * call.forward(&none).unwrap();
        assert_relative_eq!(total, expected, max_relative = 1e-11);
    }

    #[test]
    fn test_call_price_bounds(market in market_strategy(), strike in 20.0..200.0_f64) {
        let none = MarketOverrides::default();
        let call = Pricer::new(market, VanillaCall::new(strike).unwrap());
        let pv = call.present_value(&none).unwrap();
        let df = call.discount_factor(&none).unwrap();
        let forward = call.forward(&none).unwrap();

        // df * max(F - K, 0) <= C <= df * F
        prop_assert!(pv >= df * (forward - strike).max(0.0) - 1e-9);
        prop_assert!(pv <= df * forward + 1e-9);
    }
}
