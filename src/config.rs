#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Runtime configuration for the chat view, provided via context.
///
/// The message endpoint and the debounce delay are injected rather than
/// hardcoded so the view can be pointed at a fake backend in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    /// Endpoint the initial history fetch is issued against.
    pub endpoint: String,
    /// Delay between mount and the initial history fetch, in milliseconds.
    pub fetch_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/message".to_owned(),
            fetch_delay_ms: 10,
        }
    }
}
