use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod context;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Module entry point: wire up panic reporting and the console logger.
/// The dashboard itself boots via `startDashboard()`.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(domain::logging::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Trading dashboard module initialized",
    );
}
