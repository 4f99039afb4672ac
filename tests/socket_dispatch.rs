use serde_json::json;
use trading_dashboard_wasm::domain::events::DashboardEvent;
use trading_dashboard_wasm::domain::market_data::Symbol;
use trading_dashboard_wasm::infrastructure::socket::{ClientMessage, decode_event};

#[test]
fn price_update_decodes_to_typed_ticker() {
    let frame = json!({
        "event": "price_update",
        "data": {
            "symbol": "BTCUSDT",
            "price": "65000.12",
            "priceChangePercent": "1.25",
            "high24h": "66000.00",
            "low24h": "64000.00",
            "volume24h": "12345.6"
        }
    })
    .to_string();

    match decode_event(&frame).unwrap() {
        Some(DashboardEvent::PriceUpdate(ticker)) => {
            assert_eq!(ticker.symbol, "BTCUSDT");
            assert_eq!(ticker.price.as_deref(), Some("65000.12"));
            assert_eq!(ticker.price_change_percent.as_deref(), Some("1.25"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn orderbook_update_decodes_levels() {
    let frame = json!({
        "event": "orderbook_update",
        "data": {
            "symbol": "BTCUSDT",
            "bids": [["64999.50", "0.500"], ["64999.00", "1.200"]],
            "asks": [["65000.50", "0.300"]]
        }
    })
    .to_string();

    match decode_event(&frame).unwrap() {
        Some(DashboardEvent::OrderBookUpdate(book)) => {
            assert_eq!(book.bids.len(), 2);
            assert_eq!(book.asks.len(), 1);
            assert_eq!(book.bids[0].0, "64999.50");
            assert_eq!(book.bids[0].1, "0.500");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn recent_trades_decodes_in_payload_order() {
    let frame = json!({
        "event": "recent_trades",
        "data": [
            {"id": 1, "price": "65000.10", "qty": "0.0020", "time": 1700000000000u64, "isBuyerMaker": true},
            {"id": 2, "price": "65000.20", "qty": "0.0010", "time": 1700000001000u64, "isBuyerMaker": false}
        ]
    })
    .to_string();

    match decode_event(&frame).unwrap() {
        Some(DashboardEvent::RecentTrades(trades)) => {
            assert_eq!(trades.len(), 2);
            assert_eq!(trades[0].price, "65000.10");
            assert!(trades[0].is_buyer_maker);
            assert!(!trades[1].is_buyer_maker);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn absent_trades_payload_decodes_to_empty_feed() {
    let frame = json!({"event": "recent_trades"}).to_string();
    match decode_event(&frame).unwrap() {
        Some(DashboardEvent::RecentTrades(trades)) => assert!(trades.is_empty()),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn account_update_decodes_balances_and_assets() {
    let frame = json!({
        "event": "account_update",
        "data": {
            "totalWalletBalance": "10000.50",
            "availableBalance": "9000.00",
            "totalUnrealizedPnL": "-12.34",
            "assets": [
                {"asset": "USDT", "walletBalance": "10000.50", "unrealizedProfit": "-12.34"}
            ]
        }
    })
    .to_string();

    match decode_event(&frame).unwrap() {
        Some(DashboardEvent::AccountUpdate(account)) => {
            assert_eq!(account.total_wallet_balance, "10000.50");
            assert_eq!(account.assets.len(), 1);
            assert_eq!(account.assets[0].asset, "USDT");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn orders_update_and_history_decode_to_distinct_events() {
    let order = json!({
        "orderId": 42u64,
        "symbol": "BTCUSDT",
        "side": "BUY",
        "type": "LIMIT",
        "origQty": "0.010",
        "price": "60000.00",
        "status": "NEW",
        "time": 1700000000000u64
    });

    let open = json!({"event": "orders_update", "data": [order]}).to_string();
    assert!(matches!(
        decode_event(&open).unwrap(),
        Some(DashboardEvent::OpenOrdersUpdate(orders)) if orders.len() == 1 && orders[0].order_id == 42
    ));

    let history = json!({"event": "order_history", "data": [order]}).to_string();
    assert!(matches!(
        decode_event(&history).unwrap(),
        Some(DashboardEvent::OrderHistory(orders)) if orders[0].order_type == "LIMIT"
    ));
}

#[test]
fn order_response_decodes_success_and_failure() {
    let ok = json!({
        "event": "order_response",
        "data": {"success": true, "orderId": 123u64}
    })
    .to_string();
    match decode_event(&ok).unwrap() {
        Some(DashboardEvent::OrderResponse(outcome)) => {
            assert!(outcome.success);
            assert_eq!(outcome.order_id, Some(123));
        }
        other => panic!("unexpected event: {other:?}"),
    }

    let failed = json!({
        "event": "order_response",
        "data": {"success": false, "error": "Insufficient margin"}
    })
    .to_string();
    match decode_event(&failed).unwrap() {
        Some(DashboardEvent::OrderResponse(outcome)) => {
            assert!(!outcome.success);
            assert_eq!(outcome.error.as_deref(), Some("Insufficient margin"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn unknown_event_names_decode_to_none() {
    let frame = json!({"event": "heartbeat", "data": {}}).to_string();
    assert!(decode_event(&frame).unwrap().is_none());
}

#[test]
fn malformed_frames_are_decode_errors() {
    assert!(decode_event("not json").is_err());
    let bad_payload = json!({"event": "price_update", "data": [1, 2, 3]}).to_string();
    assert!(decode_event(&bad_payload).is_err());
}

#[test]
fn outbound_messages_carry_the_envelope_shape() {
    let wire = ClientMessage::SubscribeSymbol(Symbol::from("ethusdt")).to_wire();
    let value: serde_json::Value = serde_json::from_str(&wire).unwrap();
    assert_eq!(value["event"], "subscribe_symbol");
    assert_eq!(value["data"], "ETHUSDT");

    let wire = ClientMessage::RequestAccountUpdate.to_wire();
    let value: serde_json::Value = serde_json::from_str(&wire).unwrap();
    assert_eq!(value["event"], "request_account_update");
    assert!(value["data"].is_null());
}
