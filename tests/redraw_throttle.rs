use trading_dashboard_wasm::domain::chart::{REDRAW_WINDOW_MS, RedrawThrottle};

/// The worked example from the dashboard behavior: updates at t=0 and t=0.3s
/// redraw once (at t=0); a third at t=1.1s redraws again.
#[test]
fn example_sequence_redraws_twice() {
    let mut throttle = RedrawThrottle::default();
    assert!(throttle.should_redraw(0.0));
    assert!(!throttle.should_redraw(300.0));
    assert!(throttle.should_redraw(1100.0));
}

#[test]
fn window_is_rolling_from_last_redraw_not_last_event() {
    let mut throttle = RedrawThrottle::default();
    assert!(throttle.should_redraw(0.0));
    // Skipped events must not push the window forward
    assert!(!throttle.should_redraw(900.0));
    assert!(!throttle.should_redraw(950.0));
    assert!(throttle.should_redraw(1000.0));
}

/// For events arriving faster than once per second, redraws are bounded by
/// ceil(elapsed_seconds) + 1.
#[test]
fn burst_redraw_count_is_bounded() {
    let mut throttle = RedrawThrottle::default();

    let elapsed_ms = 5_400.0;
    let mut redraws = 0;
    let mut t = 0.0;
    while t <= elapsed_ms {
        if throttle.should_redraw(t) {
            redraws += 1;
        }
        t += 50.0; // 20 events per second
    }

    let bound = (elapsed_ms / 1000.0).ceil() as u32 + 1;
    assert!(redraws <= bound, "{redraws} redraws exceeds bound {bound}");
    assert!(redraws >= 5, "throttle should not starve the chart: {redraws}");
}

#[test]
fn slow_events_all_redraw() {
    let mut throttle = RedrawThrottle::new(REDRAW_WINDOW_MS);
    assert!(throttle.should_redraw(0.0));
    assert!(throttle.should_redraw(1500.0));
    assert!(throttle.should_redraw(3000.0));
}
