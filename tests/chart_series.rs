use quickcheck_macros::quickcheck;
use trading_dashboard_wasm::domain::chart::{ChartSeries, LIVE_POINT_CAP, RELOAD_POINT_CAP};

#[test]
fn append_keeps_sequences_paired_and_capped() {
    let mut series = ChartSeries::new();
    for i in 0..(LIVE_POINT_CAP + 10) {
        series.push_point(format!("t{i}"), i as f64);
        assert_eq!(series.labels().len(), series.prices().len());
        assert!(series.len() <= LIVE_POINT_CAP);
    }
    assert_eq!(series.len(), LIVE_POINT_CAP);
}

#[test]
fn append_evicts_exactly_one_from_the_front() {
    let mut series = ChartSeries::new();
    for i in 0..LIVE_POINT_CAP {
        series.push_point(format!("t{i}"), i as f64);
    }

    series.push_point("fresh".to_string(), 999.0);

    assert_eq!(series.len(), LIVE_POINT_CAP);
    assert_eq!(series.labels()[0], "t1");
    assert_eq!(series.prices()[0], 1.0);
    assert_eq!(series.labels().last().map(String::as_str), Some("fresh"));
    assert_eq!(series.prices().last().copied(), Some(999.0));
}

#[test]
fn reload_yields_exactly_n_points_in_input_order() {
    let mut series = ChartSeries::new();
    let points: Vec<(String, f64)> =
        (0..73).map(|i| (format!("c{i}"), 100.0 + i as f64)).collect();

    series.replace(points.clone());

    assert_eq!(series.len(), 73);
    for (i, (label, price)) in points.iter().enumerate() {
        assert_eq!(&series.labels()[i], label);
        assert_eq!(series.prices()[i], *price);
    }
}

#[test]
fn reload_is_capped_at_one_hundred() {
    let mut series = ChartSeries::new();
    let points: Vec<(String, f64)> =
        (0..250).map(|i| (format!("c{i}"), i as f64)).collect();

    series.replace(points);

    assert_eq!(series.len(), RELOAD_POINT_CAP);
    assert_eq!(series.labels()[0], "c0");
}

#[test]
fn reload_replaces_wholesale_not_incrementally() {
    let mut series = ChartSeries::new();
    series.push_point("live".to_string(), 1.0);
    series.replace(vec![("h0".to_string(), 5.0)]);

    assert_eq!(series.labels(), &["h0".to_string()][..]);
    assert_eq!(series.prices(), &[5.0][..]);
}

#[quickcheck]
fn paired_eviction_invariant(prices: Vec<f64>) -> bool {
    let mut series = ChartSeries::new();
    for (i, price) in prices.iter().enumerate() {
        series.push_point(format!("t{i}"), *price);
    }
    series.labels().len() == series.prices().len() && series.len() <= LIVE_POINT_CAP
}

#[quickcheck]
fn reload_then_appends_preserve_invariant(history: Vec<f64>, live: Vec<f64>) -> bool {
    let mut series = ChartSeries::new();
    series.replace(history.iter().enumerate().map(|(i, p)| (format!("h{i}"), *p)).collect());
    if series.len() > RELOAD_POINT_CAP || series.labels().len() != series.prices().len() {
        return false;
    }
    for (i, price) in live.iter().enumerate() {
        series.push_point(format!("l{i}"), *price);
    }
    // The live cap only applies once appends trim the reloaded backlog
    series.labels().len() == series.prices().len() && series.len() <= RELOAD_POINT_CAP
}
