pub mod client;
pub mod dto;

pub use client::DashboardHttpClient;
pub use dto::{ApiResponse, CancelOrderRequest, KlineRecord, PlaceOrderRequest, chart_points};
