use crate::domain::entities::CallbackPayload;
use crate::domain::errors::DomainResult;

/// Delivers rating results to caller-supplied endpoints
#[async_trait::async_trait]
pub trait CallbackDispatcher: Send + Sync {
    /// POST the payload to `url` once. No retries.
    async fn post(&self, url: &str, payload: &CallbackPayload) -> DomainResult<()>;
}
