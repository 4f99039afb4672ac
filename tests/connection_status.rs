use trading_dashboard_wasm::domain::market_data::ConnectionState;

#[test]
fn starts_disconnected() {
    let state = ConnectionState::default();
    assert!(!state.connected);
}

#[test]
fn disconnect_then_reconnect_hits_every_status_text() {
    let mut state = ConnectionState::default();

    state.on_connect();
    assert!(state.connected);
    assert_eq!(state.status_text, "Connected");

    state.on_disconnect();
    assert!(!state.connected);
    assert_eq!(state.status_text, "Disconnected");

    state.on_connect();
    assert!(state.connected);
    assert_eq!(state.status_text, "Connected");
}
