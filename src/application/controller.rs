use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::str::FromStr;

use gloo::events::EventListener;
use gloo_timers::callback::Interval;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use crate::config::DashboardConfig;
use crate::context::DashboardContext;
use crate::domain::chart::RedrawThrottle;
use crate::domain::errors::DashboardError;
use crate::domain::events::DashboardEvent;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{
    ChartInterval, HistoryFilter, OrderOutcome, OrderSide, OrderType, Symbol, TickerSnapshot,
};
use crate::infrastructure::http::{
    CancelOrderRequest, DashboardHttpClient, PlaceOrderRequest, chart_points,
};
use crate::infrastructure::rendering::LineChart;
use crate::infrastructure::socket::{ClientMessage, DashboardSocket};
use crate::infrastructure::ui::NotificationService;
use crate::time_utils;

const CHART_CANVAS_ID: &str = "price-chart";
const CHART_WIDTH: u32 = 760;
const CHART_HEIGHT: u32 = 320;
const HISTORY_FETCH_LIMIT: u32 = 50;

/// The dashboard's single application component.
///
/// Owns the push-channel handle, the chart widget and the REST client, and
/// reacts to inbound events (push messages or DOM events) by mutating the
/// [`DashboardContext`] and repainting the chart. Everything runs on the one
/// browser event loop - `Rc`/`RefCell` sharing only.
pub struct DashboardController {
    config: DashboardConfig,
    ctx: DashboardContext,
    http: DashboardHttpClient,
    socket: Rc<DashboardSocket>,
    notifications: NotificationService,
    chart: RefCell<Option<LineChart>>,
    throttle: RefCell<RedrawThrottle>,
    /// Generation token for chart reloads; responses that lost the race to a
    /// newer symbol/interval switch are discarded.
    chart_generation: Cell<u64>,
    listeners: RefCell<Vec<EventListener>>,
    refresher: RefCell<Option<Interval>>,
    weak_self: Weak<Self>,
}

impl DashboardController {
    pub fn new(config: DashboardConfig, ctx: DashboardContext) -> Rc<Self> {
        let http = DashboardHttpClient::new(config.api_base_url.clone());
        let socket = Rc::new(DashboardSocket::new(config.socket_url.clone()));

        Rc::new_cyclic(|weak_self| Self {
            config,
            ctx,
            http,
            socket,
            notifications: NotificationService::new(),
            chart: RefCell::new(None),
            throttle: RefCell::new(RedrawThrottle::default()),
            chart_generation: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            refresher: RefCell::new(None),
            weak_self: weak_self.clone(),
        })
    }

    /// Strong handle to self for event handlers and spawned tasks. Always
    /// upgrades: a method can only run while some strong reference exists.
    fn rc(&self) -> Rc<Self> {
        self.weak_self.upgrade().expect("controller outlives its handlers")
    }

    /// Fixed startup sequence: open channel, bind DOM listeners, build chart,
    /// fetch initial data, arm the update requester. No step failure aborts
    /// the sequence; each is caught and surfaced as a transient notification.
    pub async fn bootstrap(&self) {
        get_logger().info(
            LogComponent::Application("Controller"),
            "🚀 Starting trading dashboard",
        );

        self.open_push_channel();
        self.bind_dom_listeners();

        if let Err(e) = self.build_chart() {
            get_logger().error(
                LogComponent::Application("Controller"),
                &format!("❌ Chart setup failed: {e}"),
            );
            self.notifications.error("Price chart unavailable");
        }

        if let Err(e) = self.load_initial_data().await {
            get_logger().error(
                LogComponent::Application("Controller"),
                &format!("❌ Initial data load failed: {e}"),
            );
            self.notifications.error("Failed to load initial dashboard data");
        }

        self.arm_update_requester();

        get_logger().info(LogComponent::Application("Controller"), "✅ Dashboard ready");
    }

    // ---- push channel ----------------------------------------------------

    fn open_push_channel(&self) {
        let controller = self.rc();
        let handler: Rc<dyn Fn(DashboardEvent)> =
            Rc::new(move |event| controller.handle_event(event));
        Rc::clone(&self.socket).spawn(handler);
    }

    /// The single handler for every push event - one arm per event name.
    pub fn handle_event(&self, event: DashboardEvent) {
        match event {
            DashboardEvent::Connected => {
                self.ctx.connection.update(|c| c.on_connect());
                self.notifications.success("Connected to server");
                let symbol = self.ctx.selection.get_untracked().symbol;
                self.socket.emit(ClientMessage::SubscribeSymbol(symbol));
            }
            DashboardEvent::Disconnected => {
                self.ctx.connection.update(|c| c.on_disconnect());
                self.notifications.error("Disconnected from server");
            }
            DashboardEvent::PriceUpdate(ticker) => self.on_price_update(ticker),
            DashboardEvent::OrderBookUpdate(book) => self.ctx.order_book.set(book),
            DashboardEvent::RecentTrades(trades) => {
                self.ctx.trades.update(|feed| feed.replace(trades));
            }
            DashboardEvent::AccountUpdate(snapshot) => {
                // One payload, two renderers: balance summary and portfolio
                self.ctx.account.set(Some(snapshot));
            }
            DashboardEvent::OpenOrdersUpdate(orders) => self.ctx.open_orders.set(orders),
            DashboardEvent::OrderHistory(orders) => self.ctx.order_history.set(orders),
            DashboardEvent::OrderResponse(outcome) => self.handle_order_response(outcome),
        }
    }

    /// Ticker refresh happens on every event; the chart mutates at most once
    /// per throttle window, and only when the widget exists and the payload
    /// carries a parseable price.
    fn on_price_update(&self, ticker: TickerSnapshot) {
        let price = ticker.price.as_deref().and_then(|p| p.parse::<f64>().ok());
        self.ctx.ticker.set(ticker);

        let Some(price) = price else {
            return;
        };
        if !self.throttle.borrow_mut().should_redraw(time_utils::now_ms()) {
            return;
        }
        if let Some(chart) = self.chart.borrow_mut().as_mut() {
            chart.append_point(time_utils::now_label(), price);
        }
    }

    /// Shared by the REST placement path and the `order_response` push event.
    fn handle_order_response(&self, outcome: OrderOutcome) {
        if outcome.success {
            let order_id =
                outcome.order_id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string());
            let text = match outcome.message {
                Some(message) => format!("Order placed: #{order_id} - {message}"),
                None => format!("Order placed: #{order_id}"),
            };
            self.notifications.success(&text);
            self.spawn_refresh_open_orders();
        } else {
            let reason = outcome.error.unwrap_or_else(|| "Unknown error".to_string());
            self.notifications.error(&format!("Order failed: {reason}"));
        }
        self.ctx.order_form.submitting.set(false);
    }

    // ---- DOM wiring ------------------------------------------------------

    /// Attach listeners to the selection and order-entry controls. Listener
    /// handles are kept alive for the lifetime of the controller.
    fn bind_dom_listeners(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            get_logger().error(
                LogComponent::Application("Controller"),
                "❌ Document not available, cannot bind listeners",
            );
            return;
        };

        let mut listeners = Vec::new();

        if let Some(select) = select_by_id(&document, "symbol-select") {
            let controller = self.rc();
            let handle = select.clone();
            listeners.push(EventListener::new(&select, "change", move |_| {
                controller.change_symbol(&handle.value());
            }));
        }

        if let Ok(buttons) = document.query_selector_all(".interval-btn") {
            for i in 0..buttons.length() {
                let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                let Some(interval) = button
                    .get_attribute("data-interval")
                    .and_then(|v| ChartInterval::from_str(&v).ok())
                else {
                    continue;
                };
                let controller = self.rc();
                listeners.push(EventListener::new(&button, "click", move |_| {
                    controller.change_interval(interval);
                }));
            }
        }

        for (id, side) in [("order-side-buy", OrderSide::Buy), ("order-side-sell", OrderSide::Sell)]
        {
            if let Some(tab) = document.get_element_by_id(id) {
                let controller = self.rc();
                listeners.push(EventListener::new(&tab, "click", move |_| {
                    controller.ctx.order_form.side.set(side);
                }));
            }
        }

        if let Some(select) = select_by_id(&document, "order-type") {
            let controller = self.rc();
            let handle = select.clone();
            listeners.push(EventListener::new(&select, "change", move |_| {
                if let Ok(order_type) = OrderType::from_str(&handle.value()) {
                    controller.ctx.order_form.order_type.set(order_type);
                }
            }));
        }

        if let Some(button) = document.get_element_by_id("place-order-btn") {
            let controller = self.rc();
            listeners.push(EventListener::new(&button, "click", move |_| {
                controller.place_order();
            }));
        }

        if let Some(button) = document.get_element_by_id("refresh-orders-btn") {
            let controller = self.rc();
            listeners.push(EventListener::new(&button, "click", move |_| {
                controller.spawn_refresh_open_orders();
            }));
        }

        if let Some(select) = select_by_id(&document, "history-filter") {
            let controller = self.rc();
            let handle = select.clone();
            listeners.push(EventListener::new(&select, "change", move |_| {
                if let Ok(filter) = HistoryFilter::from_str(&handle.value()) {
                    controller.ctx.history_filter.set(filter);
                }
            }));
        }

        // Click-to-fill: the current price fills the limit-price field
        if let Some(price_tag) = document.get_element_by_id("current-price") {
            let controller = self.rc();
            listeners.push(EventListener::new(&price_tag, "click", move |_| {
                let ticker = controller.ctx.ticker.get_untracked();
                if let Some(price) = ticker.price {
                    set_input_value("order-price", &price);
                }
            }));
        }

        // Cancel buttons are per-row, so delegate from the list container
        if let Some(container) = document.get_element_by_id("open-orders") {
            let controller = self.rc();
            listeners.push(EventListener::new(&container, "click", move |event| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok())
                else {
                    return;
                };
                let Ok(Some(button)) = target.closest(".cancel-btn") else {
                    return;
                };
                let order_id =
                    button.get_attribute("data-order-id").and_then(|v| v.parse::<u64>().ok());
                let symbol = button.get_attribute("data-symbol");
                if let (Some(order_id), Some(symbol)) = (order_id, symbol) {
                    controller.cancel_order(Symbol::from(symbol.as_str()), order_id);
                }
            }));
        }

        get_logger().info(
            LogComponent::Application("Controller"),
            &format!("🔗 Bound {} DOM listeners", listeners.len()),
        );
        *self.listeners.borrow_mut() = listeners;
    }

    // ---- user-driven selection -------------------------------------------

    pub fn change_symbol(&self, raw: &str) {
        let symbol = Symbol::from(raw);
        get_logger().info(
            LogComponent::Application("Controller"),
            &format!("🔄 Switching symbol to {}", symbol.value()),
        );

        self.ctx.selection.update(|s| s.symbol = symbol.clone());
        self.socket.emit(ClientMessage::SubscribeSymbol(symbol));
        self.spawn_chart_reload();
    }

    pub fn change_interval(&self, interval: ChartInterval) {
        get_logger().info(
            LogComponent::Application("Controller"),
            &format!("🔄 Switching chart interval to {interval}"),
        );

        self.ctx.selection.update(|s| s.interval = interval);
        self.spawn_chart_reload();
    }

    // ---- chart -----------------------------------------------------------

    fn build_chart(&self) -> Result<(), DashboardError> {
        let chart = LineChart::new(CHART_CANVAS_ID, CHART_WIDTH, CHART_HEIGHT)?;
        *self.chart.borrow_mut() = Some(chart);
        Ok(())
    }

    fn spawn_chart_reload(&self) {
        let controller = self.rc();
        spawn_local(async move {
            controller.load_chart_data().await;
        });
    }

    /// Full reload of the chart from candle history. Failures are logged only
    /// - the chart keeps showing its previous (stale) data.
    pub async fn load_chart_data(&self) {
        let generation = self.chart_generation.get() + 1;
        self.chart_generation.set(generation);

        let selection = self.ctx.selection.get_untracked();
        let result = self
            .http
            .get_klines(&selection.symbol, selection.interval, self.config.kline_limit)
            .await;

        if self.chart_generation.get() != generation {
            get_logger().debug(
                LogComponent::Application("Controller"),
                "Discarding stale chart data response",
            );
            return;
        }

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                get_logger().error(
                    LogComponent::Application("Controller"),
                    &format!("❌ Chart data fetch failed: {e}"),
                );
                return;
            }
        };

        if !response.success {
            get_logger().error(
                LogComponent::Application("Controller"),
                &format!(
                    "❌ Chart data request rejected: {}",
                    response.error.unwrap_or_else(|| "no error text".to_string())
                ),
            );
            return;
        }

        let records = response.data.unwrap_or_default();
        match chart_points(&records, time_utils::format_time_of_day) {
            Ok(points) => {
                if let Some(chart) = self.chart.borrow_mut().as_mut() {
                    let count = points.len();
                    chart.replace_series(points);
                    get_logger().info(
                        LogComponent::Application("Controller"),
                        &format!("📈 Chart reloaded with {count} points"),
                    );
                }
            }
            Err(e) => {
                get_logger().error(
                    LogComponent::Application("Controller"),
                    &format!("❌ Chart data decode failed: {e}"),
                );
            }
        }
    }

    // ---- REST ------------------------------------------------------------

    /// Startup fetch sequence. One catch at the caller covers the whole
    /// sequence; individual sub-fetch failures are not distinguished.
    async fn load_initial_data(&self) -> Result<(), DashboardError> {
        let balance = self.http.get_account_balance().await?;
        if balance.success {
            if let Some(snapshot) = balance.data {
                self.ctx.account.set(Some(snapshot));
            }
        }

        self.refresh_open_orders().await?;

        let selection = self.ctx.selection.get_untracked();
        let history = self.http.get_order_history(&selection.symbol, HISTORY_FETCH_LIMIT).await?;
        if history.success {
            if let Some(orders) = history.data {
                self.ctx.order_history.set(orders);
            }
        }

        self.load_chart_data().await;
        Ok(())
    }

    async fn refresh_open_orders(&self) -> Result<(), DashboardError> {
        let selection = self.ctx.selection.get_untracked();
        let response = self.http.get_open_orders(Some(&selection.symbol)).await?;
        if response.success {
            if let Some(orders) = response.data {
                self.ctx.open_orders.set(orders);
            }
        }
        Ok(())
    }

    pub fn spawn_refresh_open_orders(&self) {
        let controller = self.rc();
        spawn_local(async move {
            if let Err(e) = controller.refresh_open_orders().await {
                get_logger().error(
                    LogComponent::Application("Controller"),
                    &format!("❌ Open orders refresh failed: {e}"),
                );
            }
        });
    }

    /// Validate the order form and submit it. The response - success or
    /// failure - flows through the same handler as the push-channel variant.
    pub fn place_order(&self) {
        if self.ctx.order_form.submitting.get_untracked() {
            return;
        }

        let request = match self.build_order_request() {
            Ok(request) => request,
            Err(e) => {
                self.notifications.error(&e.to_string());
                return;
            }
        };

        self.ctx.order_form.submitting.set(true);
        let controller = self.rc();
        spawn_local(async move {
            match controller.http.place_order(&request).await {
                Ok(outcome) => controller.handle_order_response(outcome),
                Err(e) => {
                    get_logger().error(
                        LogComponent::Application("Controller"),
                        &format!("❌ Order request failed: {e}"),
                    );
                    controller.notifications.error("Order request failed");
                    controller.ctx.order_form.submitting.set(false);
                }
            }
        });
    }

    fn build_order_request(&self) -> Result<PlaceOrderRequest, DashboardError> {
        let selection = self.ctx.selection.get_untracked();
        let side = self.ctx.order_form.side.get_untracked();
        let order_type = self.ctx.order_form.order_type.get_untracked();

        let quantity = input_value("order-qty")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DashboardError::Validation("Quantity is required".to_string()))?;

        let price = input_value("order-price").filter(|v| !v.is_empty());
        if order_type.requires_price() && price.is_none() {
            return Err(DashboardError::Validation(format!(
                "Price is required for {order_type} orders"
            )));
        }

        let stop_price = input_value("order-stop-price").filter(|v| !v.is_empty());
        if order_type.requires_stop_price() && stop_price.is_none() {
            return Err(DashboardError::Validation(
                "Stop price is required for STOP_LIMIT orders".to_string(),
            ));
        }

        let twap_duration = if order_type == OrderType::Twap {
            input_value("order-twap-duration").and_then(|v| v.parse::<u32>().ok())
        } else {
            None
        };

        Ok(PlaceOrderRequest {
            symbol: selection.symbol.value().to_string(),
            side,
            order_type,
            quantity,
            price: price.filter(|_| order_type.requires_price()),
            stop_price: stop_price.filter(|_| order_type.requires_stop_price()),
            twap_duration,
        })
    }

    pub fn cancel_order(&self, symbol: Symbol, order_id: u64) {
        let controller = self.rc();
        spawn_local(async move {
            let request = CancelOrderRequest { symbol: symbol.value().to_string(), order_id };
            match controller.http.cancel_order(&request).await {
                Ok(response) if response.success => {
                    controller.notifications.success(&format!("Order #{order_id} cancelled"));
                    controller.spawn_refresh_open_orders();
                }
                Ok(response) => {
                    let reason =
                        response.error.unwrap_or_else(|| "Unknown error".to_string());
                    controller.notifications.error(&format!("Cancel failed: {reason}"));
                }
                Err(e) => {
                    get_logger().error(
                        LogComponent::Application("Controller"),
                        &format!("❌ Cancel request failed: {e}"),
                    );
                    controller.notifications.error("Cancel request failed");
                }
            }
        });
    }

    // ---- background refresh ----------------------------------------------

    /// Periodically nudge the server for fresh account and order snapshots.
    fn arm_update_requester(&self) {
        let socket = Rc::clone(&self.socket);
        let interval = Interval::new(self.config.refresh_interval_ms, move || {
            socket.emit(ClientMessage::RequestAccountUpdate);
            socket.emit(ClientMessage::RequestOrdersUpdate);
        });
        *self.refresher.borrow_mut() = Some(interval);

        get_logger().info(
            LogComponent::Application("Controller"),
            &format!("⏱️ Update requester armed ({}ms)", self.config.refresh_interval_ms),
        );
    }
}

// ---- small DOM helpers ---------------------------------------------------

fn select_by_id(document: &web_sys::Document, id: &str) -> Option<HtmlSelectElement> {
    document.get_element_by_id(id).and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
}

fn input_value(id: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

fn set_input_value(id: &str, value: &str) {
    if let Some(input) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}
