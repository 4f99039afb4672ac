pub mod client;
pub mod dto;

pub use client::DashboardSocket;
pub use dto::{ClientMessage, decode_event};
