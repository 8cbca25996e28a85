use crate::application::listeners::notification_log::run_notification_log_listener;
use crate::application::services::{AssignmentService, RatingService};
use crate::config::{Config, StorageBackend};
use crate::domain::ports::callback_dispatcher::CallbackDispatcher;
use crate::domain::ports::interview_repository::InterviewRepository;
use crate::domain::ports::notifier::Notifier;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::{Database, InMemoryInterviewRepository};
use crate::infrastructure::providers::{
    HttpCallbackDispatcher, HttpTopicNotifier, LocalTopicNotifier,
};
use std::sync::Arc;
use std::time::Duration;

pub async fn build_app_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    // Record store
    let interview_repo: Arc<dyn InterviewRepository> = match config.storage_backend {
        StorageBackend::Sqlite => {
            let db = Database::connect(&config.database_url).await?;
            tracing::info!("Database connection established");

            db.run_migrations().await?;
            tracing::info!("Database migrations applied");

            Arc::new(db)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory record store; assignments are lost on restart");
            Arc::new(InMemoryInterviewRepository::new())
        }
    };

    let http_timeout = Duration::from_secs(config.callback_timeout_secs);

    // Notifier: relay to an HTTP topic endpoint if configured, else broadcast in-process
    let notifier: Arc<dyn Notifier> = match &config.notification_webhook_url {
        Some(endpoint) => {
            tracing::info!(
                "Publishing topic {} to {}",
                config.notification_topic,
                endpoint
            );
            Arc::new(HttpTopicNotifier::new(endpoint.clone(), http_timeout)?)
        }
        None => {
            let topic = LocalTopicNotifier::default();
            tokio::spawn(run_notification_log_listener(topic.subscribe()));
            tracing::info!("Publishing topic {} in-process", config.notification_topic);
            Arc::new(topic)
        }
    };

    let callback_dispatcher: Arc<dyn CallbackDispatcher> =
        Arc::new(HttpCallbackDispatcher::new(http_timeout)?);
    tracing::info!(
        "Callback dispatcher initialized ({}s timeout)",
        config.callback_timeout_secs
    );

    let assignment_service = AssignmentService::new(
        interview_repo.clone(),
        notifier,
        config.base_url.clone(),
        config.notification_topic.clone(),
    );
    let rating_service = RatingService::new(interview_repo, callback_dispatcher);

    Ok(AppState {
        assignment_service,
        rating_service,
    })
}
