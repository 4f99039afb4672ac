use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::errors::DashboardError;
use crate::domain::events::DashboardEvent;
use crate::domain::market_data::Symbol;

/// Wire envelope of the push channel: `{"event": <name>, "data": <payload>}`.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

/// Decode one inbound frame into a typed event.
///
/// Unknown event names decode to `None` - the channel may carry events this
/// dashboard does not render. `connect`/`disconnect` are transport-level and
/// dispatched by the client itself, never parsed from a frame.
pub fn decode_event(raw: &str) -> Result<Option<DashboardEvent>, DashboardError> {
    let envelope: Envelope = serde_json::from_str(raw)
        .map_err(|e| DashboardError::Decode(format!("Bad push envelope: {e}")))?;

    let event = match envelope.event.as_str() {
        "price_update" => DashboardEvent::PriceUpdate(payload(&envelope.event, envelope.data)?),
        "orderbook_update" => {
            DashboardEvent::OrderBookUpdate(payload(&envelope.event, envelope.data)?)
        }
        "recent_trades" => DashboardEvent::RecentTrades(trades_payload(envelope.data)?),
        "account_update" => DashboardEvent::AccountUpdate(payload(&envelope.event, envelope.data)?),
        "orders_update" => {
            DashboardEvent::OpenOrdersUpdate(payload(&envelope.event, envelope.data)?)
        }
        "order_history" => DashboardEvent::OrderHistory(payload(&envelope.event, envelope.data)?),
        "order_response" => DashboardEvent::OrderResponse(payload(&envelope.event, envelope.data)?),
        _ => return Ok(None),
    };

    Ok(Some(event))
}

fn payload<T: serde::de::DeserializeOwned>(event: &str, data: Value) -> Result<T, DashboardError> {
    serde_json::from_value(data)
        .map_err(|e| DashboardError::Decode(format!("Bad {event} payload: {e}")))
}

/// An absent or null trades payload renders as the empty feed.
fn trades_payload(data: Value) -> Result<Vec<crate::domain::market_data::Trade>, DashboardError> {
    if data.is_null() {
        return Ok(Vec::new());
    }
    payload("recent_trades", data)
}

/// Outbound client messages.
#[derive(Debug, Clone)]
pub enum ClientMessage {
    SubscribeSymbol(Symbol),
    RequestAccountUpdate,
    RequestOrdersUpdate,
}

impl ClientMessage {
    pub fn event_name(&self) -> &'static str {
        match self {
            ClientMessage::SubscribeSymbol(_) => "subscribe_symbol",
            ClientMessage::RequestAccountUpdate => "request_account_update",
            ClientMessage::RequestOrdersUpdate => "request_orders_update",
        }
    }

    pub fn to_wire(&self) -> String {
        let data = match self {
            ClientMessage::SubscribeSymbol(symbol) => json!(symbol.value()),
            ClientMessage::RequestAccountUpdate | ClientMessage::RequestOrdersUpdate => Value::Null,
        };
        json!({ "event": self.event_name(), "data": data }).to_string()
    }
}
