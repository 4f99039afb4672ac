pub mod entities;
pub mod value_objects;

pub use entities::{
    AccountSnapshot, AssetBalance, BookLevel, ConnectionState, MAX_VISIBLE_TRADES, OrderBook,
    OrderOutcome, OrderRecord, SelectionState, TickerSnapshot, Trade, TradeFeed, format_fixed,
};
pub use value_objects::{ChartInterval, HistoryFilter, OrderSide, OrderType, Symbol};
