use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

use super::{describe_error_response, describe_transport_error};
use crate::domain::entities::CallbackPayload;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::callback_dispatcher::CallbackDispatcher;

/// Delivers rating results to caller-supplied callback URLs
#[derive(Clone)]
pub struct HttpCallbackDispatcher {
    http_client: Client,
    timeout: Duration,
}

impl HttpCallbackDispatcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            timeout,
        })
    }
}

#[async_trait]
impl CallbackDispatcher for HttpCallbackDispatcher {
    /// Makes a single HTTP POST request to the callback URL with:
    /// - JSON payload `{ "req": ..., "score": ... }` in request body
    /// - Accept: application/json
    ///
    /// Any non-2xx status is reported as a callback failure.
    async fn post(&self, url: &str, payload: &CallbackPayload) -> DomainResult<()> {
        info!("Posting rating callback to {}", url);

        match self
            .http_client
            .post(url)
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                info!("Callback to {} returned status {}", url, status.as_u16());

                if status.is_success() {
                    Ok(())
                } else {
                    Err(DomainError::Callback(describe_error_response(response).await))
                }
            }
            Err(e) => {
                let error_msg = describe_transport_error(&e, self.timeout);
                warn!("Callback to {} failed: {}", url, error_msg);
                Err(DomainError::Callback(error_msg))
            }
        }
    }
}
