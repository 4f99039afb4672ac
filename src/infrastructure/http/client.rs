use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::errors::DashboardError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{
    AccountSnapshot, ChartInterval, OrderOutcome, OrderRecord, Symbol,
};

use super::dto::{ApiResponse, CancelOrderRequest, KlineRecord, PlaceOrderRequest};

/// HTTP client for the dashboard backend REST surface.
#[derive(Debug, Clone)]
pub struct DashboardHttpClient {
    base_url: String,
}

impl DashboardHttpClient {
    /// `base_url` empty means same-origin relative paths.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Account balance snapshot: `GET /api/account/balance`.
    pub async fn get_account_balance(
        &self,
    ) -> Result<ApiResponse<AccountSnapshot>, DashboardError> {
        self.get_json(&format!("{}/api/account/balance", self.base_url)).await
    }

    /// Open orders: `GET /api/orders/open`.
    pub async fn get_open_orders(
        &self,
        symbol: Option<&Symbol>,
    ) -> Result<ApiResponse<Vec<OrderRecord>>, DashboardError> {
        let url = match symbol {
            Some(symbol) => {
                format!("{}/api/orders/open?symbol={}", self.base_url, symbol.value())
            }
            None => format!("{}/api/orders/open", self.base_url),
        };
        self.get_json(&url).await
    }

    /// Order history: `GET /api/orders/history`.
    pub async fn get_order_history(
        &self,
        symbol: &Symbol,
        limit: u32,
    ) -> Result<ApiResponse<Vec<OrderRecord>>, DashboardError> {
        let url = format!(
            "{}/api/orders/history?symbol={}&limit={}",
            self.base_url,
            symbol.value(),
            limit
        );
        self.get_json(&url).await
    }

    /// Candle history: `GET /api/klines/{symbol}?interval=&limit=`.
    pub async fn get_klines(
        &self,
        symbol: &Symbol,
        interval: ChartInterval,
        limit: u32,
    ) -> Result<ApiResponse<Vec<KlineRecord>>, DashboardError> {
        let url = format!(
            "{}/api/klines/{}?interval={}&limit={}",
            self.base_url,
            symbol.value(),
            interval.as_query_str(),
            limit
        );

        get_logger().info(
            LogComponent::Infrastructure("HTTP"),
            &format!("📡 Fetching {} candles for {}@{}", limit, symbol.value(), interval),
        );

        self.get_json(&url).await
    }

    /// Place an order: `POST /api/orders/place`. The `{success, orderId|error}`
    /// body is the order outcome, success or not.
    pub async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<OrderOutcome, DashboardError> {
        get_logger().info(
            LogComponent::Infrastructure("HTTP"),
            &format!(
                "📤 Placing {} {} order for {}",
                request.side, request.order_type, request.symbol
            ),
        );
        self.post_json(&format!("{}/api/orders/place", self.base_url), request).await
    }

    /// Cancel an order: `POST /api/orders/cancel`.
    pub async fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<ApiResponse<serde_json::Value>, DashboardError> {
        get_logger().info(
            LogComponent::Infrastructure("HTTP"),
            &format!("📤 Cancelling order #{} on {}", request.order_id, request.symbol),
        );
        self.post_json(&format!("{}/api/orders/cancel", self.base_url), request).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DashboardError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("Failed to send request: {e:?}")))?;

        if !response.ok() {
            return Err(DashboardError::Network(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DashboardError::Decode(format!("Failed to parse JSON: {e:?}")))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, DashboardError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| DashboardError::Decode(format!("Failed to encode body: {e:?}")))?
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("Failed to send request: {e:?}")))?;

        if !response.ok() {
            return Err(DashboardError::Network(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DashboardError::Decode(format!("Failed to parse JSON: {e:?}")))
    }
}
