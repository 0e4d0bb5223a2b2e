/*
[INPUT]:  Order intents across the three supported types
[OUTPUT]: Test results for intent translation and validation
[POS]:    Integration tests - order intent translator
[UPDATE]: When wire parameters or validation rules change
*/

use binfut_adapter::{AdapterError, OrderIntent, Side, TimeInForce};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_market_buy_parameter_set() {
    // MARKET BUY 0.01 BTCUSDT
    let intent = OrderIntent::Market {
        symbol: "BTCUSDT".to_string(),
        side: Side::Buy,
        quantity: dec!(0.01),
        reduce_only: false,
    };
    let params = intent.to_params().unwrap();

    assert_eq!(params.get("symbol"), Some("BTCUSDT"));
    assert_eq!(params.get("side"), Some("BUY"));
    assert_eq!(params.get("type"), Some("MARKET"));
    assert_eq!(params.get("quantity"), Some("0.01"));
    assert_eq!(params.get("reduceOnly"), Some("false"));
    assert!(!params.contains("price"));
    assert!(!params.contains("stopPrice"));
    assert!(!params.contains("timeInForce"));
}

#[test]
fn test_limit_sell_with_ioc() {
    // LIMIT SELL 0.5 ETHUSDT @ 3000, tif=IOC
    let intent = OrderIntent::Limit {
        symbol: "ETHUSDT".to_string(),
        side: Side::Sell,
        quantity: dec!(0.5),
        price: dec!(3000),
        time_in_force: TimeInForce::Ioc,
    };
    let params = intent.to_params().unwrap();

    assert_eq!(params.get("type"), Some("LIMIT"));
    assert_eq!(params.get("side"), Some("SELL"));
    assert_eq!(params.get("price"), Some("3000"));
    assert_eq!(params.get("timeInForce"), Some("IOC"));
    assert!(!params.contains("stopPrice"));
    assert!(!params.contains("reduceOnly"));
}

#[test]
fn test_stop_limit_wire_parameters() {
    // STOPLIMIT BUY 1 BTCUSDT stop=61000 limit=61500
    let intent = OrderIntent::StopLimit {
        symbol: "BTCUSDT".to_string(),
        side: Side::Buy,
        quantity: dec!(1),
        price: dec!(61500),
        stop_price: dec!(61000),
        time_in_force: TimeInForce::Gtc,
    };
    let params = intent.to_params().unwrap();

    assert_eq!(params.get("type"), Some("STOP"));
    assert_eq!(params.get("stopPrice"), Some("61000"));
    assert_eq!(params.get("price"), Some("61500"));
    assert_eq!(params.get("timeInForce"), Some("GTC"));
}

#[test]
fn test_translation_is_pure_and_stable() {
    let intent = OrderIntent::Limit {
        symbol: "ethusdt".to_string(),
        side: Side::Sell,
        quantity: dec!(0.5),
        price: dec!(3000),
        time_in_force: TimeInForce::Gtc,
    };
    let first = intent.to_params().unwrap();
    let second = intent.to_params().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.encode(), second.encode());
}

#[rstest]
#[case::zero_quantity(dec!(0), dec!(61500), dec!(61000))]
#[case::negative_quantity(dec!(-0.5), dec!(61500), dec!(61000))]
#[case::zero_price(dec!(1), dec!(0), dec!(61000))]
#[case::negative_price(dec!(1), dec!(-61500), dec!(61000))]
#[case::zero_stop_price(dec!(1), dec!(61500), dec!(0))]
#[case::negative_stop_price(dec!(1), dec!(61500), dec!(-1))]
fn test_non_positive_values_rejected(
    #[case] quantity: Decimal,
    #[case] price: Decimal,
    #[case] stop_price: Decimal,
) {
    let intent = OrderIntent::StopLimit {
        symbol: "BTCUSDT".to_string(),
        side: Side::Buy,
        quantity,
        price,
        stop_price,
        time_in_force: TimeInForce::Gtc,
    };
    let err = intent.to_params().unwrap_err();
    assert!(matches!(err, AdapterError::InvalidIntent(_)));
}

#[rstest]
#[case::market("MARKET")]
#[case::limit("LIMIT")]
#[case::stop("STOP")]
fn test_type_field_matches_variant(#[case] expected: &str) {
    let intent = match expected {
        "MARKET" => OrderIntent::Market {
            symbol: "BTCUSDT".to_string(),
            side: Side::Buy,
            quantity: dec!(1),
            reduce_only: false,
        },
        "LIMIT" => OrderIntent::Limit {
            symbol: "BTCUSDT".to_string(),
            side: Side::Buy,
            quantity: dec!(1),
            price: dec!(61500),
            time_in_force: TimeInForce::Gtc,
        },
        _ => OrderIntent::StopLimit {
            symbol: "BTCUSDT".to_string(),
            side: Side::Buy,
            quantity: dec!(1),
            price: dec!(61500),
            stop_price: dec!(61000),
            time_in_force: TimeInForce::Gtc,
        },
    };
    let params = intent.to_params().unwrap();
    assert_eq!(params.get("type"), Some(expected));
}
