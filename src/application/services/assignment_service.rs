use serde_json::Value;
use std::sync::Arc;

use crate::domain::entities::{
    AssignApplicantRequest, AssignApplicantResponse, AssignmentNotification, InterviewAssignment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{interview_repository::InterviewRepository, notifier::Notifier};

/// Version reported by `GET /interview`
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service for creating interview assignments and announcing them
#[derive(Clone)]
pub struct AssignmentService {
    interview_repo: Arc<dyn InterviewRepository>,
    notifier: Arc<dyn Notifier>,
    base_url: String,
    topic: String,
}

impl AssignmentService {
    pub fn new(
        interview_repo: Arc<dyn InterviewRepository>,
        notifier: Arc<dyn Notifier>,
        base_url: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            interview_repo,
            notifier,
            base_url: base_url.into(),
            topic: topic.into(),
        }
    }

    pub fn get_version(&self) -> &'static str {
        SERVICE_VERSION
    }

    /// Create, persist and announce a new interview assignment.
    ///
    /// `body` is the request as the caller sent it. A typed copy is used for
    /// validation while the original is what gets stored. The record is written before anything is published. A storage failure
    /// aborts the request; a notification failure is logged and counted but
    /// the assignment still succeeds.
    pub async fn assign_applicant(
        &self,
        body: Value,
    ) -> DomainResult<AssignApplicantResponse> {
        let request = AssignApplicantRequest::from_body(&body)?;
        request.validate().map_err(DomainError::ValidationError)?;

        let assignment = InterviewAssignment::new(&body, request.callback_url(), &self.base_url)?;

        if let Err(e) = self.interview_repo.put_assignment(&assignment).await {
            tracing::error!("Failed to store interview {}: {}", assignment.id, e);
            return Err(e);
        }
        metrics::counter!("interview_assignments_total").increment(1);

        tracing::info!(
            "Interview {} assigned for applicant {} ({} reviewers, callback: {})",
            assignment.id,
            request.applicant_email,
            request.reviewers.len(),
            assignment.callback_url.is_some()
        );

        let notification = AssignmentNotification::for_assignment(&self.topic, &assignment);
        match self.notifier.publish(&notification).await {
            Ok(()) => {
                metrics::counter!("interview_notifications_total", "outcome" => "published")
                    .increment(1);
            }
            Err(e) => {
                metrics::counter!("interview_notifications_total", "outcome" => "failed")
                    .increment(1);
                tracing::warn!(
                    "Notification for interview {} via {} notifier was not delivered: {}",
                    assignment.id,
                    self.notifier.notifier_name(),
                    e
                );
            }
        }

        Ok(AssignApplicantResponse::for_assignment(&assignment))
    }
}
