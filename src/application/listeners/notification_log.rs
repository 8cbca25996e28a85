use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::StreamExt;

use crate::infrastructure::providers::topic_notifier::NotificationStream;

/// Log every message from a topic subscription until the topic closes
pub(crate) async fn run_notification_log_listener(mut receiver: NotificationStream) {
    tracing::info!("Notification log listener started");

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(notification) => {
                tracing::info!(
                    topic = %notification.topic,
                    interview_id = %notification.interview_id,
                    "{}\n{}",
                    notification.subject,
                    notification.body
                );
            }
            Err(BroadcastStreamRecvError::Lagged(n)) => {
                tracing::warn!("Notification log listener lagged behind by {} messages", n);
            }
        }
    }

    tracing::error!("Assignment topic closed, stopping notification log listener");
}
