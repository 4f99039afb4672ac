use serde_json::json;
use trading_dashboard_wasm::domain::market_data::{OrderOutcome, OrderSide, OrderType};
use trading_dashboard_wasm::infrastructure::http::{CancelOrderRequest, PlaceOrderRequest};

#[test]
fn market_order_body_omits_price_fields() {
    let request = PlaceOrderRequest {
        symbol: "BTCUSDT".to_string(),
        side: OrderSide::Buy,
        order_type: OrderType::Market,
        quantity: "0.01".to_string(),
        price: None,
        stop_price: None,
        twap_duration: None,
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
        body,
        json!({"symbol": "BTCUSDT", "side": "BUY", "type": "MARKET", "quantity": "0.01"})
    );
}

#[test]
fn limit_and_stop_orders_carry_their_prices() {
    let request = PlaceOrderRequest {
        symbol: "ETHUSDT".to_string(),
        side: OrderSide::Sell,
        order_type: OrderType::StopLimit,
        quantity: "1.5".to_string(),
        price: Some("3200.00".to_string()),
        stop_price: Some("3150.00".to_string()),
        twap_duration: None,
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["type"], "STOP_LIMIT");
    assert_eq!(body["price"], "3200.00");
    assert_eq!(body["stopPrice"], "3150.00");
    assert!(body.get("twapDuration").is_none());
}

#[test]
fn twap_orders_carry_a_duration() {
    let request = PlaceOrderRequest {
        symbol: "BTCUSDT".to_string(),
        side: OrderSide::Buy,
        order_type: OrderType::Twap,
        quantity: "0.5".to_string(),
        price: None,
        stop_price: None,
        twap_duration: Some(10),
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["type"], "TWAP");
    assert_eq!(body["twapDuration"], 10);
}

#[test]
fn cancel_body_uses_camel_case_order_id() {
    let request = CancelOrderRequest { symbol: "BTCUSDT".to_string(), order_id: 42 };
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body, json!({"symbol": "BTCUSDT", "orderId": 42}));
}

#[test]
fn order_outcome_decodes_both_variants() {
    let ok: OrderOutcome =
        serde_json::from_value(json!({"success": true, "orderId": 7, "message": "TWAP started"}))
            .unwrap();
    assert!(ok.success);
    assert_eq!(ok.order_id, Some(7));
    assert_eq!(ok.message.as_deref(), Some("TWAP started"));

    let failed: OrderOutcome =
        serde_json::from_value(json!({"success": false, "error": "Missing field: quantity"}))
            .unwrap();
    assert!(!failed.success);
    assert_eq!(failed.error.as_deref(), Some("Missing field: quantity"));
}

#[test]
fn price_requirements_follow_the_order_type() {
    assert!(!OrderType::Market.requires_price());
    assert!(OrderType::Limit.requires_price());
    assert!(OrderType::StopLimit.requires_price());
    assert!(OrderType::StopLimit.requires_stop_price());
    assert!(!OrderType::Twap.requires_price());
}
