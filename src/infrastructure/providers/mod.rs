pub mod callback_client;
pub mod http_topic_notifier;
pub mod topic_notifier;

pub use callback_client::*;
pub use http_topic_notifier::*;
pub use topic_notifier::*;

use std::time::Duration;

const MAX_ERROR_BODY_CHARS: usize = 500;

/// Describe a non-2xx response, keeping at most 500 characters of the body
pub(crate) async fn describe_error_response(response: reqwest::Response) -> String {
    let status_code = response.status().as_u16();
    match response.text().await {
        Ok(body) if body.chars().count() > MAX_ERROR_BODY_CHARS => {
            let truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            format!("HTTP {}: {}", status_code, truncated)
        }
        Ok(body) => format!("HTTP {}: {}", status_code, body),
        Err(_) => format!("HTTP {} error", status_code),
    }
}

/// Describe a transport failure (timeout, connection refused, DNS failure, etc.)
pub(crate) fn describe_transport_error(err: &reqwest::Error, timeout: Duration) -> String {
    if err.is_timeout() {
        format!("Connection timeout after {} seconds: {}", timeout.as_secs(), err)
    } else if err.is_connect() {
        format!("Connection failed: {}", err)
    } else {
        format!("Network error: {}", err)
    }
}
