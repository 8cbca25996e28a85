use crate::domain::entities::AssignmentNotification;
use crate::domain::errors::DomainResult;

/// Broadcasts assignment messages to whoever subscribes to the topic
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, notification: &AssignmentNotification) -> DomainResult<()>;

    /// Get the notifier name for logging
    fn notifier_name(&self) -> &'static str;
}
