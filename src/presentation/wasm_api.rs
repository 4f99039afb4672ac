use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::application::DashboardController;
use crate::config::DashboardConfig;
use crate::context::DashboardContext;
use crate::domain::logging::{LogComponent, get_logger};

/// Boot the dashboard from JavaScript.
///
/// `config` is an optional plain object (`apiBaseUrl`, `socketUrl`,
/// `defaultSymbol`, ...); pass `undefined` for defaults. Mounts the view
/// first so the controller finds its DOM surface, then runs the fixed
/// startup sequence in the background.
#[wasm_bindgen(js_name = startDashboard)]
pub fn start_dashboard(config: JsValue) -> Result<(), JsValue> {
    let config = DashboardConfig::from_js(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    get_logger().info(
        LogComponent::Presentation("WASM"),
        &format!("🚀 Booting dashboard for {}", config.default_symbol),
    );

    let ctx = DashboardContext::new(&config);
    let controller = DashboardController::new(config, ctx);

    mount_to_body(move || view! { <App ctx=ctx /> });

    spawn_local(async move {
        controller.bootstrap().await;
    });

    Ok(())
}
