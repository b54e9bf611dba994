//! REST helper for loading message history.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Elsewhere the
//! fetch is a stub returning an error, since history only loads in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so a failed or
//! malformed history load degrades to an unchanged message list.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::chat::MessageRecord;

/// Parse and shape-validate a history response body.
///
/// The expected payload is a JSON array of `{"message": ..., "type": ...}`
/// objects. Anything else, including unknown origin tags, is an error.
///
/// # Errors
///
/// Returns a description of the first shape violation encountered.
pub fn parse_history(body: &str) -> Result<Vec<MessageRecord>, String> {
    serde_json::from_str::<Vec<MessageRecord>>(body)
        .map_err(|e| format!("malformed history payload: {e}"))
}

/// Fetch message history with a GET to `endpoint`.
///
/// # Errors
///
/// Returns an error string on network failure, a non-2xx status, or a
/// body that fails [`parse_history`].
pub async fn fetch_history(endpoint: &str) -> Result<Vec<MessageRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("history request failed: {}", resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_history(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err("history fetch is only available in the browser".to_owned())
    }
}
