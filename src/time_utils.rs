use js_sys::Date;
use wasm_bindgen::JsValue;

/// Localized time-of-day label for an epoch-millisecond timestamp.
///
/// Uses the browser locale machinery so trade rows and chart labels match what
/// the rest of the page shows.
pub fn format_time_of_day(epoch_ms: u64) -> String {
    let date = Date::new(&JsValue::from_f64(epoch_ms as f64));
    String::from(date.to_locale_time_string("default"))
}

/// Label for "now", used when appending live chart points.
pub fn now_label() -> String {
    format_time_of_day(Date::now() as u64)
}

/// Wall-clock milliseconds, the throttle's time source.
pub fn now_ms() -> f64 {
    Date::now()
}
