use trading_dashboard_wasm::domain::market_data::{
    MAX_VISIBLE_TRADES, Trade, TradeFeed, format_fixed,
};

fn trade(i: u64, buyer_maker: bool) -> Trade {
    Trade {
        id: Some(i),
        price: format!("65000.{i}"),
        qty: "0.002".to_string(),
        time: 1700000000000 + i,
        is_buyer_maker: buyer_maker,
    }
}

#[test]
fn feed_keeps_first_twenty_in_payload_order() {
    let mut feed = TradeFeed::default();
    feed.replace((0..35).map(|i| trade(i, false)).collect());

    assert_eq!(feed.rows().len(), MAX_VISIBLE_TRADES);
    assert_eq!(feed.rows()[0].id, Some(0));
    assert_eq!(feed.rows()[19].id, Some(19));
}

#[test]
fn empty_payload_leaves_feed_empty() {
    let mut feed = TradeFeed::default();
    feed.replace(vec![trade(1, true)]);
    feed.replace(Vec::new());
    assert!(feed.is_empty());
}

#[test]
fn replace_is_wholesale_not_appending() {
    let mut feed = TradeFeed::default();
    feed.replace(vec![trade(1, true), trade(2, true)]);
    feed.replace(vec![trade(3, false)]);
    assert_eq!(feed.rows().len(), 1);
    assert_eq!(feed.rows()[0].id, Some(3));
}

#[test]
fn buyer_maker_flag_selects_styling() {
    // Buyer was the maker: the aggressor sold - sell styling
    assert_eq!(trade(1, true).side_class(), "sell");
    assert_eq!(trade(2, false).side_class(), "buy");
}

#[test]
fn display_precision_is_two_and_four_decimals() {
    let t = Trade {
        id: None,
        price: "65000.1".to_string(),
        qty: "0.25".to_string(),
        time: 0,
        is_buyer_maker: false,
    };
    assert_eq!(t.display_price(), "65000.10");
    assert_eq!(t.display_qty(), "0.2500");
}

#[test]
fn format_fixed_falls_back_to_raw_input() {
    assert_eq!(format_fixed("1.5", 2), "1.50");
    assert_eq!(format_fixed("n/a", 2), "n/a");
}
