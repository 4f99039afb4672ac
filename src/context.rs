use leptos::*;

use crate::config::DashboardConfig;
use crate::domain::market_data::{
    AccountSnapshot, ChartInterval, ConnectionState, HistoryFilter, OrderBook, OrderRecord,
    OrderSide, OrderType, SelectionState, Symbol, TickerSnapshot, TradeFeed,
};

/// Reactive state of the order form controls.
#[derive(Clone, Copy)]
pub struct OrderFormState {
    pub side: RwSignal<OrderSide>,
    pub order_type: RwSignal<OrderType>,
    /// True while a placement request is in flight (drives the loading
    /// indicator on the place button).
    pub submitting: RwSignal<bool>,
}

/// All UI-facing dashboard state as one explicit context object.
///
/// Passed to the controller and provided to the view tree - there is no
/// module-level singleton. Every field is single-writer: only the controller
/// (or the bound DOM handler) mutates it, only the view reads it.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub connection: RwSignal<ConnectionState>,
    pub selection: RwSignal<SelectionState>,
    pub ticker: RwSignal<TickerSnapshot>,
    pub order_book: RwSignal<OrderBook>,
    pub trades: RwSignal<TradeFeed>,
    pub account: RwSignal<Option<AccountSnapshot>>,
    pub open_orders: RwSignal<Vec<OrderRecord>>,
    pub order_history: RwSignal<Vec<OrderRecord>>,
    pub history_filter: RwSignal<HistoryFilter>,
    pub order_form: OrderFormState,
}

impl DashboardContext {
    pub fn new(config: &DashboardConfig) -> Self {
        let selection = SelectionState {
            symbol: Symbol::from(config.default_symbol.as_str()),
            interval: config.default_interval,
        };

        Self {
            connection: create_rw_signal(ConnectionState::default()),
            selection: create_rw_signal(selection),
            ticker: create_rw_signal(TickerSnapshot::default()),
            order_book: create_rw_signal(OrderBook::default()),
            trades: create_rw_signal(TradeFeed::default()),
            account: create_rw_signal(None),
            open_orders: create_rw_signal(Vec::new()),
            order_history: create_rw_signal(Vec::new()),
            history_filter: create_rw_signal(HistoryFilter::All),
            order_form: OrderFormState {
                side: create_rw_signal(OrderSide::Buy),
                order_type: create_rw_signal(OrderType::Market),
                submitting: create_rw_signal(false),
            },
        }
    }

    /// Order history with the current status filter applied (display only -
    /// the underlying list is kept unfiltered).
    pub fn filtered_history(&self) -> Vec<OrderRecord> {
        let filter = self.history_filter.get();
        self.order_history
            .get()
            .into_iter()
            .filter(|order| filter.admits(&order.status))
            .collect()
    }

    /// Whether the given interval button should carry the active marker.
    pub fn interval_active(&self, interval: ChartInterval) -> bool {
        self.selection.get().interval == interval
    }
}
