use serde_json::json;
use trading_dashboard_wasm::infrastructure::http::{ApiResponse, KlineRecord, chart_points};

fn sample_record(open_time: u64, close: &str) -> serde_json::Value {
    json!([
        open_time,
        "64000.00", // open
        "66000.00", // high
        "63000.00", // low
        close,      // close
        "123.45",   // volume
        open_time + 59_999,
        "8000000.0",
        1234,
        "60.0",
        "3900000.0",
        "0"
    ])
}

#[test]
fn record_exposes_open_time_and_close_price() {
    let record: KlineRecord =
        serde_json::from_value(sample_record(1700000000000, "65432.10")).unwrap();
    assert_eq!(record.open_time(), 1700000000000);
    assert_eq!(record.close_price(), "65432.10");
}

#[test]
fn n_records_yield_n_points_in_input_order() {
    let records: Vec<KlineRecord> = serde_json::from_value(serde_json::Value::Array(
        (0..100u64).map(|i| sample_record(1700000000000 + i * 60_000, &format!("{}.5", 65000 + i))).collect(),
    ))
    .unwrap();

    let points = chart_points(&records, |t| t.to_string()).unwrap();

    assert_eq!(points.len(), 100);
    assert_eq!(points[0].0, "1700000000000");
    assert_eq!(points[0].1, 65000.5);
    assert_eq!(points[99].1, 65099.5);
}

#[test]
fn unparseable_close_price_is_a_decode_error() {
    let record: KlineRecord =
        serde_json::from_value(sample_record(1700000000000, "not-a-price")).unwrap();
    assert!(chart_points(&[record], |t| t.to_string()).is_err());
}

#[test]
fn klines_arrive_wrapped_in_the_rest_envelope() {
    let body = json!({
        "success": true,
        "data": [sample_record(1700000000000, "65000.00")]
    });
    let response: ApiResponse<Vec<KlineRecord>> = serde_json::from_value(body).unwrap();
    assert!(response.success);
    assert_eq!(response.data.unwrap().len(), 1);

    let failure = json!({"success": false, "error": "symbol unknown"});
    let response: ApiResponse<Vec<KlineRecord>> = serde_json::from_value(failure).unwrap();
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("symbol unknown"));
}
