use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::InterviewAssignment;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::interview_repository::InterviewRepository;

/// In-memory implementation of InterviewRepository using a HashMap
#[derive(Clone)]
pub struct InMemoryInterviewRepository {
    assignments: Arc<RwLock<HashMap<String, InterviewAssignment>>>,
}

impl InMemoryInterviewRepository {
    pub fn new() -> Self {
        Self {
            assignments: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored assignments
    pub async fn len(&self) -> usize {
        self.assignments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.assignments.read().await.is_empty()
    }
}

impl Default for InMemoryInterviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InterviewRepository for InMemoryInterviewRepository {
    async fn put_assignment(&self, assignment: &InterviewAssignment) -> DomainResult<()> {
        let mut assignments = self.assignments.write().await;
        if assignments.contains_key(&assignment.id) {
            return Err(DomainError::Storage(format!(
                "Interview {} already exists",
                assignment.id
            )));
        }
        assignments.insert(assignment.id.clone(), assignment.clone());
        Ok(())
    }

    async fn get_assignment(&self, id: &str) -> DomainResult<InterviewAssignment> {
        let assignments = self.assignments.read().await;
        assignments
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Interview {} not found", id)))
    }
}
