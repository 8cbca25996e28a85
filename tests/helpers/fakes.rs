use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use interview_review::domain::entities::{
    AssignmentNotification, CallbackPayload, InterviewAssignment,
};
use interview_review::domain::errors::{DomainError, DomainResult};
use interview_review::domain::ports::{
    callback_dispatcher::CallbackDispatcher, interview_repository::InterviewRepository,
    notifier::Notifier,
};

/// Notifier that records every publish; optionally fails after recording
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    published: Arc<Mutex<Vec<AssignmentNotification>>>,
    should_fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_failing() -> Self {
        Self {
            published: Arc::default(),
            should_fail: true,
        }
    }

    pub fn published(&self) -> Vec<AssignmentNotification> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn publish(&self, notification: &AssignmentNotification) -> DomainResult<()> {
        self.published.lock().unwrap().push(notification.clone());
        if self.should_fail {
            Err(DomainError::Notification("topic unavailable".to_string()))
        } else {
            Ok(())
        }
    }

    fn notifier_name(&self) -> &'static str {
        "recording"
    }
}

/// Dispatcher that records every callback; optionally fails after recording
#[derive(Clone, Default)]
pub struct RecordingDispatcher {
    calls: Arc<Mutex<Vec<(String, CallbackPayload)>>>,
    should_fail: bool,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_failing() -> Self {
        Self {
            calls: Arc::default(),
            should_fail: true,
        }
    }

    pub fn calls(&self) -> Vec<(String, CallbackPayload)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CallbackDispatcher for RecordingDispatcher {
    async fn post(&self, url: &str, payload: &CallbackPayload) -> DomainResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), payload.clone()));
        if self.should_fail {
            Err(DomainError::Callback("HTTP 503: unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Record store whose backend is down
pub struct UnavailableRepository;

#[async_trait]
impl InterviewRepository for UnavailableRepository {
    async fn put_assignment(&self, _assignment: &InterviewAssignment) -> DomainResult<()> {
        Err(DomainError::Storage("database is locked".to_string()))
    }

    async fn get_assignment(&self, _id: &str) -> DomainResult<InterviewAssignment> {
        Err(DomainError::Storage("database is locked".to_string()))
    }
}
