use std::sync::Arc;

use crate::domain::entities::{CallbackPayload, CallbackStatus, InterviewAssignment, RatingOutcome, Score};
use crate::domain::errors::DomainResult;
use crate::domain::ports::{
    callback_dispatcher::CallbackDispatcher, interview_repository::InterviewRepository,
};

/// Service for accepting reviewer scores and forwarding them to callers
#[derive(Clone)]
pub struct RatingService {
    interview_repo: Arc<dyn InterviewRepository>,
    callback_dispatcher: Arc<dyn CallbackDispatcher>,
}

impl RatingService {
    pub fn new(
        interview_repo: Arc<dyn InterviewRepository>,
        callback_dispatcher: Arc<dyn CallbackDispatcher>,
    ) -> Self {
        Self {
            interview_repo,
            callback_dispatcher,
        }
    }

    /// Rate an interview and forward the score to its callback, if any.
    ///
    /// Scores are forwarded, never stored, so the same interview may be rated
    /// again; every rating dispatches its own callback.
    pub async fn rate(&self, interview_id: &str, score: i64) -> DomainResult<RatingOutcome> {
        let score = Score::new(score)?;
        let assignment = self.interview_repo.get_assignment(interview_id).await?;

        let callback = match assignment.callback_url.as_deref() {
            Some(url) => self.dispatch_callback(&assignment, url, score).await,
            None => CallbackStatus::NotConfigured,
        };

        metrics::counter!("interview_ratings_total").increment(1);
        metrics::counter!("interview_callbacks_total", "outcome" => callback.as_str()).increment(1);

        tracing::info!(
            "Interview {} rated {} (callback: {})",
            assignment.id,
            score,
            callback.as_str()
        );

        Ok(RatingOutcome {
            interview_id: assignment.id,
            score,
            callback,
        })
    }

    async fn dispatch_callback(
        &self,
        assignment: &InterviewAssignment,
        url: &str,
        score: Score,
    ) -> CallbackStatus {
        let req = match assignment.request_value() {
            Ok(req) => req,
            Err(e) => {
                tracing::error!("Cannot build callback for interview {}: {}", assignment.id, e);
                return CallbackStatus::Failed(e.to_string());
            }
        };

        let payload = CallbackPayload {
            req,
            score: score.value(),
        };

        match self.callback_dispatcher.post(url, &payload).await {
            Ok(()) => CallbackStatus::Delivered,
            Err(e) => {
                tracing::warn!(
                    "Callback for interview {} to {} failed: {}",
                    assignment.id,
                    url,
                    e
                );
                CallbackStatus::Failed(e.to_string())
            }
        }
    }
}
