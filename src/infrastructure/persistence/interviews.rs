use sqlx::Row;

use crate::domain::entities::InterviewAssignment;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::interview_repository::InterviewRepository;
use crate::infrastructure::persistence::Database;

impl Database {
    pub async fn create_interview_assignment(
        &self,
        assignment: &InterviewAssignment,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO interview_assignments (id, request, interview_url, callback_url, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&assignment.id)
        .bind(&assignment.request)
        .bind(&assignment.interview_url)
        .bind(&assignment.callback_url)
        .bind(&assignment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get an interview assignment by ID
    pub async fn get_interview_assignment_by_id(
        &self,
        id: &str,
    ) -> DomainResult<Option<InterviewAssignment>> {
        let row = sqlx::query(
            "SELECT id, request, interview_url, callback_url, created_at
             FROM interview_assignments
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(InterviewAssignment {
                id: row.try_get("id")?,
                request: row.try_get("request")?,
                interview_url: row.try_get("interview_url")?,
                callback_url: row.try_get("callback_url")?,
                created_at: row.try_get("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }
}

#[async_trait::async_trait]
impl InterviewRepository for Database {
    async fn put_assignment(&self, assignment: &InterviewAssignment) -> DomainResult<()> {
        self.create_interview_assignment(assignment).await
    }

    async fn get_assignment(&self, id: &str) -> DomainResult<InterviewAssignment> {
        self.get_interview_assignment_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Interview {} not found", id)))
    }
}
