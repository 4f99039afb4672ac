use derive_more::{Deref, DerefMut, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - Торговый символ
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "Symbol({})", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(symbol.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

/// Value Object - Chart interval (range buttons carry these as data values)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum ChartInterval {
    #[default]
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    OneMinute,

    #[strum(serialize = "5m")]
    #[serde(rename = "5m")]
    FiveMinutes,

    #[strum(serialize = "15m")]
    #[serde(rename = "15m")]
    FifteenMinutes,

    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    OneHour,

    #[strum(serialize = "4h")]
    #[serde(rename = "4h")]
    FourHours,

    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,
}

impl ChartInterval {
    pub fn as_query_str(&self) -> &str {
        self.as_ref()
    }
}

/// Value Object - Order side (the BUY/SELL tabs of the order form)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    StrumDisplay,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum OrderSide {
    #[default]
    #[strum(serialize = "BUY")]
    #[serde(rename = "BUY")]
    Buy,

    #[strum(serialize = "SELL")]
    #[serde(rename = "SELL")]
    Sell,
}

/// Value Object - Order type selector values
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum OrderType {
    #[default]
    #[strum(serialize = "MARKET")]
    #[serde(rename = "MARKET")]
    Market,

    #[strum(serialize = "LIMIT")]
    #[serde(rename = "LIMIT")]
    Limit,

    #[strum(serialize = "STOP_LIMIT")]
    #[serde(rename = "STOP_LIMIT")]
    StopLimit,

    #[strum(serialize = "TWAP")]
    #[serde(rename = "TWAP")]
    Twap,
}

impl OrderType {
    /// Limit-style orders carry a price field on the wire.
    pub fn requires_price(&self) -> bool {
        matches!(self, Self::Limit | Self::StopLimit)
    }

    pub fn requires_stop_price(&self) -> bool {
        matches!(self, Self::StopLimit)
    }
}

/// Value Object - Order history status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum HistoryFilter {
    #[default]
    #[strum(serialize = "ALL")]
    All,

    #[strum(serialize = "NEW")]
    New,

    #[strum(serialize = "FILLED")]
    Filled,

    #[strum(serialize = "CANCELED")]
    Canceled,
}

impl HistoryFilter {
    /// Whether an order with the given server-reported status passes the filter.
    pub fn admits(&self, status: &str) -> bool {
        match self {
            Self::All => true,
            _ => status.eq_ignore_ascii_case(self.as_ref()),
        }
    }
}
