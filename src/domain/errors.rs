use thiserror::Error;

/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, Error)]
pub enum DashboardError {
    #[error("Network Error: {0}")]
    Network(String),

    #[error("Decode Error: {0}")]
    Decode(String),

    #[error("DOM Error: {0}")]
    Dom(String),

    #[error("Chart Error: {0}")]
    Chart(String),

    #[error("Channel Error: {0}")]
    Channel(String),

    #[error("Validation Error: {0}")]
    Validation(String),
}

impl DashboardError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
