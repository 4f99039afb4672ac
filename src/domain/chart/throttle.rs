/// Minimum wall-clock interval between chart redraws driven by price pushes.
pub const REDRAW_WINDOW_MS: f64 = 1000.0;

/// Wall-clock throttle for high-frequency chart mutations.
///
/// The ticker is refreshed on every price push; the chart mutates at most once
/// per rolling window. The window is time-based, not event-count-based, so a
/// burst collapses to one redraw per window.
#[derive(Debug, Clone)]
pub struct RedrawThrottle {
    window_ms: f64,
    last_redraw_ms: Option<f64>,
}

impl RedrawThrottle {
    pub fn new(window_ms: f64) -> Self {
        Self { window_ms, last_redraw_ms: None }
    }

    /// Whether a redraw may happen at `now_ms`. Records the redraw when allowed.
    pub fn should_redraw(&mut self, now_ms: f64) -> bool {
        match self.last_redraw_ms {
            Some(last) if now_ms - last < self.window_ms => false,
            _ => {
                self.last_redraw_ms = Some(now_ms);
                true
            }
        }
    }
}

impl Default for RedrawThrottle {
    fn default() -> Self {
        Self::new(REDRAW_WINDOW_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_always_redraws() {
        let mut throttle = RedrawThrottle::default();
        assert!(throttle.should_redraw(0.0));
    }

    #[test]
    fn burst_collapses_to_one_redraw_per_window() {
        let mut throttle = RedrawThrottle::default();
        assert!(throttle.should_redraw(0.0));
        assert!(!throttle.should_redraw(300.0));
        assert!(!throttle.should_redraw(999.0));
        assert!(throttle.should_redraw(1100.0));
    }
}
