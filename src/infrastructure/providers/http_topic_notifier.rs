use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

use super::{describe_error_response, describe_transport_error};
use crate::domain::entities::AssignmentNotification;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::notifier::Notifier;

/// Relays topic notifications to an HTTP fan-out endpoint
#[derive(Clone)]
pub struct HttpTopicNotifier {
    endpoint: String,
    http_client: Client,
    timeout: Duration,
}

impl HttpTopicNotifier {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint,
            http_client,
            timeout,
        })
    }
}

#[async_trait]
impl Notifier for HttpTopicNotifier {
    /// Makes an HTTP POST request to the topic endpoint with body
    /// `{topic, subject, message, interviewId}`
    async fn publish(&self, notification: &AssignmentNotification) -> DomainResult<()> {
        let body = json!({
            "topic": notification.topic,
            "subject": notification.subject,
            "message": notification.body,
            "interviewId": notification.interview_id,
        });

        match self
            .http_client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                info!(
                    "Published notification for interview {} to topic {} ({})",
                    notification.interview_id,
                    notification.topic,
                    response.status().as_u16()
                );
                Ok(())
            }
            Ok(response) => {
                let error_msg = describe_error_response(response).await;
                warn!(
                    "Topic endpoint {} rejected notification: {}",
                    self.endpoint, error_msg
                );
                Err(DomainError::Notification(error_msg))
            }
            Err(e) => {
                let error_msg = describe_transport_error(&e, self.timeout);
                warn!("Topic delivery to {} failed: {}", self.endpoint, error_msg);
                Err(DomainError::Notification(error_msg))
            }
        }
    }

    fn notifier_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_notification_error() {
        // Port 9 (discard) on loopback is expected to refuse connections
        let notifier =
            HttpTopicNotifier::new("http://127.0.0.1:9/topic".to_string(), Duration::from_secs(2))
                .unwrap();
        let notification = AssignmentNotification {
            topic: "t".to_string(),
            subject: "s".to_string(),
            body: "b".to_string(),
            interview_id: "id".to_string(),
        };

        let err = notifier.publish(&notification).await.unwrap_err();
        assert!(matches!(err, DomainError::Notification(_)));
        assert_eq!(notifier.notifier_name(), "http");
    }
}
