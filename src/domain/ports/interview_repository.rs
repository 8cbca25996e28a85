use crate::domain::entities::InterviewAssignment;
use crate::domain::errors::DomainResult;

/// Durable store for interview assignments, keyed by assignment id
#[async_trait::async_trait]
pub trait InterviewRepository: Send + Sync {
    /// Persist a new assignment. Records are write-once; an existing id is an error.
    async fn put_assignment(&self, assignment: &InterviewAssignment) -> DomainResult<()>;

    /// Fetch an assignment, or `DomainError::NotFound` if the id is unknown
    async fn get_assignment(&self, id: &str) -> DomainResult<InterviewAssignment>;
}
