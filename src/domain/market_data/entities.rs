pub use super::value_objects::{ChartInterval, Symbol};
use serde::{Deserialize, Serialize};

/// Maximum number of rows the recent-trades panel displays.
pub const MAX_VISIBLE_TRADES: usize = 20;

/// Parse a server-formatted decimal string and re-render it with fixed precision.
/// Falls back to the raw string when the server sends something unparseable.
pub fn format_fixed(raw: &str, decimals: usize) -> String {
    match raw.parse::<f64>() {
        Ok(value) => format!("{:.*}", decimals, value),
        Err(_) => raw.to_string(),
    }
}

/// Domain entity - connection state of the push channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionState {
    pub connected: bool,
    pub status_text: String,
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self { connected: false, status_text: "Connecting...".to_string() }
    }
}

impl ConnectionState {
    pub fn on_connect(&mut self) {
        self.connected = true;
        self.status_text = "Connected".to_string();
    }

    pub fn on_disconnect(&mut self) {
        self.connected = false;
        self.status_text = "Disconnected".to_string();
    }
}

/// Domain entity - current user selection driving subscriptions and history fetches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub symbol: Symbol,
    pub interval: ChartInterval,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self { symbol: Symbol::from("BTCUSDT"), interval: ChartInterval::OneMinute }
    }
}

/// Ticker payload pushed on every price update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TickerSnapshot {
    pub symbol: String,
    pub price: Option<String>,
    pub price_change_percent: Option<String>,
    pub high_24h: Option<String>,
    pub low_24h: Option<String>,
    pub volume_24h: Option<String>,
}

impl TickerSnapshot {
    pub fn display_price(&self) -> String {
        self.price.as_deref().map(|p| format_fixed(p, 2)).unwrap_or_else(|| "--".to_string())
    }

    pub fn display_change(&self) -> String {
        self.price_change_percent
            .as_deref()
            .map(|p| format!("{}%", format_fixed(p, 2)))
            .unwrap_or_else(|| "--".to_string())
    }

    /// Positive change gets buy styling, negative gets sell styling.
    pub fn change_class(&self) -> &'static str {
        let falling = self
            .price_change_percent
            .as_deref()
            .and_then(|p| p.parse::<f64>().ok())
            .map(|p| p < 0.0)
            .unwrap_or(false);
        if falling { "sell" } else { "buy" }
    }
}

/// One recent-trade row, display projection only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[serde(default)]
    pub id: Option<u64>,
    pub price: String,
    pub qty: String,
    pub time: u64,
    pub is_buyer_maker: bool,
}

impl Trade {
    pub fn display_price(&self) -> String {
        format_fixed(&self.price, 2)
    }

    pub fn display_qty(&self) -> String {
        format_fixed(&self.qty, 4)
    }

    /// Buyer-is-maker means the aggressor sold into the book.
    pub fn side_class(&self) -> &'static str {
        if self.is_buyer_maker { "sell" } else { "buy" }
    }
}

/// Domain entity - the recent-trades panel content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeFeed {
    rows: Vec<Trade>,
}

impl TradeFeed {
    /// Replace the feed wholesale, keeping at most the first
    /// [`MAX_VISIBLE_TRADES`] entries in payload order.
    pub fn replace(&mut self, mut payload: Vec<Trade>) {
        payload.truncate(MAX_VISIBLE_TRADES);
        self.rows = payload;
    }

    pub fn rows(&self) -> &[Trade] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One price level of the order book: `[price, qty]` string pair on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLevel(pub String, pub String);

impl BookLevel {
    pub fn display_price(&self) -> String {
        format_fixed(&self.0, 2)
    }

    pub fn display_qty(&self) -> String {
        format_fixed(&self.1, 4)
    }
}

/// Order-book payload, replaced wholesale per update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBook {
    pub symbol: String,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

/// Per-asset balance line of the account snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub asset: String,
    pub wallet_balance: String,
    #[serde(default)]
    pub unrealized_profit: Option<String>,
}

/// Account payload feeding both the balance and the portfolio renderers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountSnapshot {
    pub total_wallet_balance: String,
    pub available_balance: String,
    #[serde(rename = "totalUnrealizedPnL")]
    pub total_unrealized_pnl: String,
    pub assets: Vec<AssetBalance>,
}

/// One open-order or order-history row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: u64,
    pub symbol: String,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub orig_qty: String,
    #[serde(default)]
    pub price: String,
    pub status: String,
    pub time: u64,
}

impl OrderRecord {
    pub fn side_class(&self) -> &'static str {
        if self.side.eq_ignore_ascii_case("SELL") { "sell" } else { "buy" }
    }
}

/// Result of an order placement, from REST response or `order_response` push
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderOutcome {
    pub success: bool,
    pub order_id: Option<u64>,
    pub error: Option<String>,
    pub message: Option<String>,
}
