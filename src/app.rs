use leptos::*;
use strum::IntoEnumIterator;

use crate::context::DashboardContext;
use crate::domain::market_data::{
    ChartInterval, HistoryFilter, OrderSide, OrderType, Trade, format_fixed,
};
use crate::time_utils;

/// 🦀 Root component of the trading dashboard
#[component]
pub fn App(ctx: DashboardContext) -> impl IntoView {
    provide_context(ctx);

    view! {
        <style>
            {r#"
            .trading-dashboard {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 15px 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
                margin-bottom: 20px;
            }

            .panel {
                background: rgba(0, 0, 0, 0.35);
                border: 1px solid #4a5d73;
                border-radius: 10px;
                padding: 15px;
                margin-bottom: 20px;
            }

            .panel h3 {
                margin: 0 0 10px 0;
                color: #72c685;
                font-size: 14px;
                text-transform: uppercase;
            }

            .dashboard-grid {
                display: grid;
                grid-template-columns: 2fr 1fr 1fr;
                gap: 20px;
            }

            .price-value { font-size: 24px; font-weight: 700; font-family: 'Courier New', monospace; cursor: pointer; }
            .price-value.buy, .buy { color: #72c685; }
            .price-value.sell, .sell { color: #e74c3c; }
            .ticker-extra { font-size: 12px; color: #a0a0a0; }

            .status-dot {
                display: inline-block;
                width: 10px;
                height: 10px;
                border-radius: 50%;
                background: #e74c3c;
                margin-right: 6px;
            }
            .status-dot.connected { background: #72c685; }

            .interval-btn, .side-tab, .action-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 6px 12px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-right: 5px;
            }
            .interval-btn.active, .side-tab.active { background: #f39c12; }
            .action-btn:disabled { opacity: 0.5; cursor: wait; }

            .data-table { width: 100%; font-family: 'Courier New', monospace; font-size: 12px; border-collapse: collapse; }
            .data-table td, .data-table th { padding: 2px 6px; text-align: right; }
            .data-table th { color: #a0a0a0; font-weight: normal; }

            .placeholder { color: #a0a0a0; font-size: 12px; text-align: center; padding: 10px; }

            .order-form input, .order-form select, select {
                background: #2c3e50;
                color: white;
                border: 1px solid #4a5d73;
                border-radius: 5px;
                padding: 6px;
                margin: 3px 0;
                width: 100%;
            }

            #notifications {
                position: fixed;
                top: 20px;
                right: 20px;
                z-index: 1000;
                max-width: 320px;
            }
            .notification {
                padding: 10px 14px;
                margin-bottom: 8px;
                border-radius: 6px;
                font-size: 13px;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.5);
            }
            .notification.success { background: #1e6b3a; border: 1px solid #72c685; }
            .notification.error { background: #6b1e1e; border: 1px solid #e74c3c; }
            "#}
        </style>
        <div class="trading-dashboard">
            <Header />
            <div class="dashboard-grid">
                <div>
                    <ChartPanel />
                    <OrdersPanel />
                </div>
                <div>
                    <OrderBookPanel />
                    <TradesPanel />
                </div>
                <div>
                    <OrderFormPanel />
                    <AccountPanel />
                </div>
            </div>
            <div id="notifications"></div>
        </div>
    }
}

/// 📊 Symbol selector, live ticker and connection indicator
#[component]
fn Header() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    view! {
        <div class="header">
            <div>
                <select id="symbol-select">
                    <option value="BTCUSDT" selected=true>"BTC/USDT"</option>
                    <option value="ETHUSDT">"ETH/USDT"</option>
                    <option value="BNBUSDT">"BNB/USDT"</option>
                    <option value="SOLUSDT">"SOL/USDT"</option>
                    <option value="XRPUSDT">"XRP/USDT"</option>
                </select>
            </div>
            <div>
                <span
                    id="current-price"
                    class=move || format!("price-value {}", ctx.ticker.get().change_class())
                    title="Click to fill the order price"
                >
                    {move || ctx.ticker.get().display_price()}
                </span>
                <span id="price-change" class="ticker-extra">
                    {move || ctx.ticker.get().display_change()}
                </span>
            </div>
            <div class="ticker-extra">
                {move || {
                    let ticker = ctx.ticker.get();
                    format!(
                        "24h H {} | L {} | Vol {}",
                        ticker.high_24h.as_deref().map(|v| format_fixed(v, 2)).unwrap_or_else(|| "--".to_string()),
                        ticker.low_24h.as_deref().map(|v| format_fixed(v, 2)).unwrap_or_else(|| "--".to_string()),
                        ticker.volume_24h.as_deref().map(|v| format_fixed(v, 2)).unwrap_or_else(|| "--".to_string()),
                    )
                }}
            </div>
            <div id="connection-status">
                <span class="status-dot" class:connected=move || ctx.connection.get().connected></span>
                <span>{move || ctx.connection.get().status_text}</span>
            </div>
        </div>
    }
}

/// 📈 Price chart with interval range buttons
#[component]
fn ChartPanel() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    view! {
        <div class="panel">
            <h3>"Price Chart"</h3>
            <div id="chart-intervals">
                {ChartInterval::iter()
                    .map(|interval| {
                        view! {
                            <button
                                class="interval-btn"
                                class:active=move || ctx.interval_active(interval)
                                data-interval=interval.to_string()
                            >
                                {interval.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <canvas id="price-chart" width="760" height="320"></canvas>
        </div>
    }
}

/// 📚 Order book, replaced wholesale on every push
#[component]
fn OrderBookPanel() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    view! {
        <div class="panel">
            <h3>"Order Book"</h3>
            <table class="data-table">
                <tbody>
                    <For
                        each=move || { ctx.order_book.get().asks.into_iter().enumerate().collect::<Vec<_>>() }
                        key=|(i, level)| (*i, level.0.clone())
                        children=|(_, level)| {
                            view! {
                                <tr>
                                    <td class="sell">{level.display_price()}</td>
                                    <td>{level.display_qty()}</td>
                                </tr>
                            }
                        }
                    />
                    <For
                        each=move || { ctx.order_book.get().bids.into_iter().enumerate().collect::<Vec<_>>() }
                        key=|(i, level)| (*i, level.0.clone())
                        children=|(_, level)| {
                            view! {
                                <tr>
                                    <td class="buy">{level.display_price()}</td>
                                    <td>{level.display_qty()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// 🔄 Recent trades feed: first 20 rows of the payload, or a placeholder
#[component]
fn TradesPanel() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    view! {
        <div class="panel">
            <h3>"Recent Trades"</h3>
            <Show
                when=move || !ctx.trades.get().is_empty()
                fallback=|| view! { <div class="placeholder">"No recent trades"</div> }
            >
                <table class="data-table">
                    <tbody>
                        <For
                            each=move || {
                                ctx.trades.get().rows().iter().cloned().enumerate().collect::<Vec<_>>()
                            }
                            key=|(i, trade)| (*i, trade.time)
                            children=|(_, trade): (usize, Trade)| {
                                view! {
                                    <tr>
                                        <td class=trade.side_class()>{trade.display_price()}</td>
                                        <td>{trade.display_qty()}</td>
                                        <td>{time_utils::format_time_of_day(trade.time)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

/// 📝 Manual order entry form
#[component]
fn OrderFormPanel() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let form = ctx.order_form;

    view! {
        <div class="panel order-form">
            <h3>"Place Order"</h3>
            <div>
                <button
                    id="order-side-buy"
                    class="side-tab"
                    class:active=move || form.side.get() == OrderSide::Buy
                >
                    "Buy"
                </button>
                <button
                    id="order-side-sell"
                    class="side-tab"
                    class:active=move || form.side.get() == OrderSide::Sell
                >
                    "Sell"
                </button>
            </div>
            <select id="order-type">
                {OrderType::iter()
                    .map(|order_type| {
                        view! {
                            <option value=order_type.to_string() selected={order_type == OrderType::Market}>
                                {order_type.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <input id="order-qty" type="text" placeholder="Quantity" />
            <Show when=move || form.order_type.get().requires_price()>
                <input id="order-price" type="text" placeholder="Price" />
            </Show>
            <Show when=move || form.order_type.get().requires_stop_price()>
                <input id="order-stop-price" type="text" placeholder="Stop price" />
            </Show>
            <Show when=move || form.order_type.get() == OrderType::Twap>
                <input id="order-twap-duration" type="text" placeholder="TWAP duration (min)" />
            </Show>
            <button id="place-order-btn" class="action-btn" disabled=move || form.submitting.get()>
                {move || if form.submitting.get() { "Placing..." } else { "Place Order" }}
            </button>
        </div>
    }
}

/// 💰 Balance summary and portfolio - two renderers, one account payload
#[component]
fn AccountPanel() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    let total = move || {
        ctx.account
            .get()
            .map(|a| format_fixed(&a.total_wallet_balance, 2))
            .unwrap_or_else(|| "--".to_string())
    };
    let available = move || {
        ctx.account
            .get()
            .map(|a| format_fixed(&a.available_balance, 2))
            .unwrap_or_else(|| "--".to_string())
    };
    let pnl = move || {
        ctx.account
            .get()
            .map(|a| format_fixed(&a.total_unrealized_pnl, 2))
            .unwrap_or_else(|| "--".to_string())
    };

    view! {
        <div class="panel" id="balance-summary">
            <h3>"Balance"</h3>
            <table class="data-table">
                <tbody>
                    <tr><th>"Total"</th><td>{total}</td></tr>
                    <tr><th>"Available"</th><td>{available}</td></tr>
                    <tr><th>"Unrealized PnL"</th><td>{pnl}</td></tr>
                </tbody>
            </table>
        </div>
        <div class="panel" id="portfolio">
            <h3>"Portfolio"</h3>
            <table class="data-table">
                <tbody>
                    <For
                        each=move || ctx.account.get().map(|a| a.assets).unwrap_or_default()
                        key=|asset| asset.asset.clone()
                        children=|asset| {
                            view! {
                                <tr>
                                    <th>{asset.asset.clone()}</th>
                                    <td>{format_fixed(&asset.wallet_balance, 4)}</td>
                                    <td>
                                        {asset
                                            .unrealized_profit
                                            .as_deref()
                                            .map(|v| format_fixed(v, 2))
                                            .unwrap_or_else(|| "--".to_string())}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// 📋 Open orders and order history
#[component]
fn OrdersPanel() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    view! {
        <div class="panel">
            <h3>"Open Orders"</h3>
            <button id="refresh-orders-btn" class="action-btn">"Refresh"</button>
            <table class="data-table" id="open-orders">
                <tbody>
                    <For
                        each=move || ctx.open_orders.get()
                        key=|order| order.order_id
                        children=|order| {
                            view! {
                                <tr>
                                    <td>{order.symbol.clone()}</td>
                                    <td class=order.side_class()>{order.side.clone()}</td>
                                    <td>{order.order_type.clone()}</td>
                                    <td>{format_fixed(&order.orig_qty, 4)}</td>
                                    <td>{format_fixed(&order.price, 2)}</td>
                                    <td>
                                        <button
                                            class="action-btn cancel-btn"
                                            data-order-id=order.order_id.to_string()
                                            data-symbol=order.symbol.clone()
                                        >
                                            "Cancel"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
        <div class="panel">
            <h3>"Order History"</h3>
            <select id="history-filter">
                {HistoryFilter::iter()
                    .map(|filter| {
                        view! {
                            <option value=filter.to_string() selected={filter == HistoryFilter::All}>
                                {filter.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <table class="data-table">
                <tbody>
                    <For
                        each=move || ctx.filtered_history()
                        key=|order| order.order_id
                        children=|order| {
                            view! {
                                <tr>
                                    <td>{time_utils::format_time_of_day(order.time)}</td>
                                    <td>{order.symbol.clone()}</td>
                                    <td class=order.side_class()>{order.side.clone()}</td>
                                    <td>{format_fixed(&order.orig_qty, 4)}</td>
                                    <td>{order.status.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
