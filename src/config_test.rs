use super::*;

// =============================================================
// ChatConfig defaults
// =============================================================

#[test]
fn config_default_endpoint_is_local_message_route() {
    let config = ChatConfig::default();
    assert_eq!(config.endpoint, "http://localhost:3000/message");
}

#[test]
fn config_default_fetch_delay_is_ten_ms() {
    let config = ChatConfig::default();
    assert_eq!(config.fetch_delay_ms, 10);
}
