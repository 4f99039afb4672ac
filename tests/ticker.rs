use serde_json::json;
use trading_dashboard_wasm::domain::market_data::TickerSnapshot;

#[test]
fn decodes_the_push_payload_keys() {
    let ticker: TickerSnapshot = serde_json::from_value(json!({
        "symbol": "BTCUSDT",
        "price": "65000.123",
        "priceChangePercent": "-2.5",
        "high24h": "66000",
        "low24h": "63000",
        "volume24h": "9999"
    }))
    .unwrap();

    assert_eq!(ticker.display_price(), "65000.12");
    assert_eq!(ticker.display_change(), "-2.50%");
    assert_eq!(ticker.change_class(), "sell");
}

#[test]
fn missing_price_renders_a_placeholder_but_keeps_the_rest() {
    let ticker: TickerSnapshot =
        serde_json::from_value(json!({"symbol": "BTCUSDT"})).unwrap();
    assert_eq!(ticker.price, None);
    assert_eq!(ticker.display_price(), "--");
    // No change information defaults to buy styling, matching a flat open
    assert_eq!(ticker.change_class(), "buy");
}

#[test]
fn rising_change_gets_buy_styling() {
    let ticker: TickerSnapshot = serde_json::from_value(json!({
        "symbol": "ETHUSDT",
        "price": "3200.0",
        "priceChangePercent": "0.75"
    }))
    .unwrap();
    assert_eq!(ticker.change_class(), "buy");
}
