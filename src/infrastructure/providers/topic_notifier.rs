use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

use crate::domain::entities::AssignmentNotification;
use crate::domain::errors::DomainResult;
use crate::domain::ports::notifier::Notifier;

pub(crate) type NotificationStream =
    Pin<Box<dyn Stream<Item = Result<AssignmentNotification, BroadcastStreamRecvError>> + Send>>;

/// In-process broadcast topic for assignment notifications
#[derive(Clone)]
pub struct LocalTopicNotifier {
    tx: broadcast::Sender<AssignmentNotification>,
}

impl LocalTopicNotifier {
    /// Create a new topic with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to notifications published after this call
    pub fn subscribe(&self) -> NotificationStream {
        let rx = self.tx.subscribe();
        Box::pin(BroadcastStream::new(rx))
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for LocalTopicNotifier {
    fn default() -> Self {
        Self::new(100)
    }
}

#[async_trait]
impl Notifier for LocalTopicNotifier {
    async fn publish(&self, notification: &AssignmentNotification) -> DomainResult<()> {
        // Nobody listening is not a failure of the publisher
        if let Err(e) = self.tx.send(notification.clone()) {
            tracing::debug!(
                "No active subscribers on topic {}: {}",
                notification.topic,
                e
            );
        }
        Ok(())
    }

    fn notifier_name(&self) -> &'static str {
        "local"
    }
}
