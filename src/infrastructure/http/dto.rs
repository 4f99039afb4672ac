use serde::{Deserialize, Serialize};

use crate::domain::errors::DashboardError;
use crate::domain::market_data::{OrderSide, OrderType};

/// Standard REST envelope: `{success, data}` or `{success: false, error}`.
/// A `success: false` body is a normal response variant, not a transport error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One historical candle record as a fixed-position array.
///
/// Only the open time (index 0) and close price (index 4) feed the chart; the
/// remaining positions are decoded and dropped.
#[derive(Debug, Deserialize)]
pub struct KlineRecord(
    u64,                   // Open time
    serde::de::IgnoredAny, // Open
    serde::de::IgnoredAny, // High
    serde::de::IgnoredAny, // Low
    String,                // Close
    serde::de::IgnoredAny, // Volume
    serde::de::IgnoredAny, // Close time
    serde::de::IgnoredAny, // Quote asset volume
    serde::de::IgnoredAny, // Number of trades
    serde::de::IgnoredAny, // Taker buy base asset volume
    serde::de::IgnoredAny, // Taker buy quote asset volume
    serde::de::IgnoredAny, // Ignore
);

impl KlineRecord {
    pub fn open_time(&self) -> u64 {
        self.0
    }

    pub fn close_price(&self) -> &str {
        &self.4
    }
}

/// Transform candle records into (time label, price) chart points, preserving
/// input order. The label formatter is injected so the transform stays testable
/// off-browser.
pub fn chart_points(
    records: &[KlineRecord],
    label: impl Fn(u64) -> String,
) -> Result<Vec<(String, f64)>, DashboardError> {
    let mut points = Vec::with_capacity(records.len());
    for record in records {
        let price = record
            .close_price()
            .parse::<f64>()
            .map_err(|_| DashboardError::Decode(format!("Invalid close price: {}", record.4)))?;
        points.push((label(record.open_time()), price));
    }
    Ok(points)
}

/// Body of `POST /api/orders/place`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twap_duration: Option<u32>,
}

/// Body of `POST /api/orders/cancel`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub symbol: String,
    pub order_id: u64,
}
