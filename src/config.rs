use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::domain::errors::DashboardError;
use crate::domain::market_data::ChartInterval;

/// Runtime configuration, optionally supplied by the host page as a plain JS
/// object at startup. Every field has a working default so `startDashboard()`
/// with no argument boots against a same-origin backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Base URL for REST calls; empty means same-origin relative paths.
    pub api_base_url: String,
    /// Push-channel WebSocket URL.
    pub socket_url: String,
    /// Market pair selected on load.
    pub default_symbol: String,
    /// Chart bucket selected on load.
    pub default_interval: ChartInterval,
    /// Result-count limit for candle history fetches.
    pub kline_limit: u32,
    /// Period of the background account/orders update requester.
    pub refresh_interval_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            socket_url: "ws://127.0.0.1:5000/stream".to_string(),
            default_symbol: "BTCUSDT".to_string(),
            default_interval: ChartInterval::OneMinute,
            kline_limit: 100,
            refresh_interval_ms: 10_000,
        }
    }
}

impl DashboardConfig {
    /// Build from the optional JS init object; `undefined`/`null` mean defaults.
    pub fn from_js(value: JsValue) -> Result<Self, DashboardError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| DashboardError::Decode(format!("invalid dashboard config: {e}")))
    }
}
