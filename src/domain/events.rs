use crate::domain::market_data::{
    AccountSnapshot, OrderBook, OrderOutcome, OrderRecord, TickerSnapshot, Trade,
};

/// Typed push-channel events - one variant per event name, one handler per
/// variant. The payload type is fixed by the variant, so handlers never parse.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    Connected,
    Disconnected,
    PriceUpdate(TickerSnapshot),
    OrderBookUpdate(OrderBook),
    RecentTrades(Vec<Trade>),
    AccountUpdate(AccountSnapshot),
    OpenOrdersUpdate(Vec<OrderRecord>),
    OrderHistory(Vec<OrderRecord>),
    OrderResponse(OrderOutcome),
}

impl DashboardEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            DashboardEvent::Connected => "connect",
            DashboardEvent::Disconnected => "disconnect",
            DashboardEvent::PriceUpdate(_) => "price_update",
            DashboardEvent::OrderBookUpdate(_) => "orderbook_update",
            DashboardEvent::RecentTrades(_) => "recent_trades",
            DashboardEvent::AccountUpdate(_) => "account_update",
            DashboardEvent::OpenOrdersUpdate(_) => "orders_update",
            DashboardEvent::OrderHistory(_) => "order_history",
            DashboardEvent::OrderResponse(_) => "order_response",
        }
    }
}
