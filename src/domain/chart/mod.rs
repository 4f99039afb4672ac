pub mod series;
pub mod throttle;

pub use series::{ChartSeries, LIVE_POINT_CAP, RELOAD_POINT_CAP};
pub use throttle::{REDRAW_WINDOW_MS, RedrawThrottle};
