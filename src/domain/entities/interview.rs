use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

// ============================================================================
// Assignment request / response
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InterviewTypeRepr")]
pub enum InterviewType {
    LiveVideo,
    OnDemand,
}

/// Interview type as callers send it: by name or by numeric code (0 or 1)
#[derive(Deserialize)]
#[serde(untagged)]
enum InterviewTypeRepr {
    Code(u64),
    Name(String),
}

impl TryFrom<InterviewTypeRepr> for InterviewType {
    type Error = String;

    fn try_from(repr: InterviewTypeRepr) -> Result<Self, Self::Error> {
        match repr {
            InterviewTypeRepr::Code(0) => Ok(InterviewType::LiveVideo),
            InterviewTypeRepr::Code(1) => Ok(InterviewType::OnDemand),
            InterviewTypeRepr::Code(code) => Err(format!("unknown interview type code {}", code)),
            InterviewTypeRepr::Name(name) => match name.to_ascii_lowercase().as_str() {
                "livevideo" => Ok(InterviewType::LiveVideo),
                "ondemand" => Ok(InterviewType::OnDemand),
                _ => Err(format!("unknown interview type '{}'", name)),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    #[serde(default, alias = "ReviewerEmail")]
    pub reviewer_email: String,
    #[serde(default, alias = "ReviewerName")]
    pub reviewer_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CallbackDetails {
    #[serde(default, alias = "CallbackUrl")]
    pub callback_url: Option<String>,
}

/// Request to pair an applicant's interview with a set of reviewers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignApplicantRequest {
    #[serde(alias = "InterviewType")]
    pub interview_type: InterviewType,
    #[serde(default, alias = "InterviewId")]
    pub interview_id: String,
    #[serde(default, alias = "ApplicantFirstName")]
    pub applicant_first_name: String,
    #[serde(default, alias = "ApplicantLastName")]
    pub applicant_last_name: String,
    #[serde(default, alias = "ApplicantEmail")]
    pub applicant_email: String,
    #[serde(default, alias = "PrimaryOwnerEmail")]
    pub primary_owner_email: String,
    #[serde(default, alias = "RecruiterEmail")]
    pub recruiter_email: String,
    #[serde(default, alias = "JobRequisitionId")]
    pub job_requisition_id: String,
    #[serde(default, alias = "Reviewers")]
    pub reviewers: Vec<Reviewer>,
    #[serde(alias = "InterviewStartDate")]
    pub interview_start_date: DateTime<Utc>,
    #[serde(alias = "InterviewEndDate")]
    pub interview_end_date: DateTime<Utc>,
    #[serde(default, alias = "CallbackData")]
    pub callback_data: Option<CallbackDetails>,
}

impl AssignApplicantRequest {
    /// Typed view of a raw request body. Unknown fields are ignored.
    pub fn from_body(body: &Value) -> DomainResult<Self> {
        Self::deserialize(body).map_err(|e| {
            DomainError::ValidationError(format!("Invalid assignment request: {}", e))
        })
    }

    /// Callback URL, if one was supplied. Blank values count as absent.
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_data
            .as_ref()
            .and_then(|data| data.callback_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Validate request fields
    pub fn validate(&self) -> Result<(), String> {
        if self.interview_end_date < self.interview_start_date {
            return Err("Interview end date must not be before its start date".to_string());
        }

        if let Some(url) = self.callback_url() {
            if url.len() > 2048 {
                return Err("Callback URL must be at most 2048 characters".to_string());
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("Callback URL must be HTTP or HTTPS".to_string());
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignApplicantResponse {
    pub interview_url: String,
    /// Currently the same link as `interview_url`; there is no separate recruiter view yet.
    pub recruiter_url: String,
}

impl AssignApplicantResponse {
    pub fn for_assignment(assignment: &InterviewAssignment) -> Self {
        Self {
            interview_url: assignment.interview_url.clone(),
            recruiter_url: assignment.interview_url.clone(),
        }
    }
}

// ============================================================================
// InterviewAssignment (persisted record)
// ============================================================================

/// Build the rating link for an interview: `{base}/interview/{id}`
pub fn build_interview_url(base_url: &str, id: &str) -> String {
    format!("{}/interview/{}", base_url.trim_end_matches('/'), id)
}

/// Write-once record of an assignment, keyed by its generated id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewAssignment {
    pub id: String,
    pub request: String, // JSON, stored verbatim
    pub interview_url: String,
    pub callback_url: Option<String>,
    pub created_at: String, // ISO 8601
}

impl InterviewAssignment {
    /// Create a new record with a generated ID. `body` is kept exactly as the
    /// caller sent it so it can be replayed into the callback.
    pub fn new(body: &Value, callback_url: Option<&str>, base_url: &str) -> DomainResult<Self> {
        let id = Uuid::new_v4().to_string();
        let serialized = serde_json::to_string(body)
            .map_err(|e| DomainError::Internal(format!("Failed to serialize request: {}", e)))?;

        Ok(Self {
            interview_url: build_interview_url(base_url, &id),
            callback_url: callback_url.map(str::to_string),
            request: serialized,
            created_at: Utc::now().to_rfc3339(),
            id,
        })
    }

    /// Stored request as untyped JSON, exactly as it was written
    pub fn request_value(&self) -> DomainResult<Value> {
        serde_json::from_str(&self.request).map_err(|e| {
            DomainError::Internal(format!(
                "Stored request for interview {} is not valid JSON: {}",
                self.id, e
            ))
        })
    }

    /// Stored request decoded back into its typed form
    pub fn decoded_request(&self) -> DomainResult<AssignApplicantRequest> {
        serde_json::from_str(&self.request).map_err(|e| {
            DomainError::Internal(format!(
                "Stored request for interview {} does not match the request shape: {}",
                self.id, e
            ))
        })
    }
}

// ============================================================================
// Outbound payloads
// ============================================================================

/// Body POSTed to a caller's callback URL once an interview is rated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackPayload {
    pub req: Value,
    pub score: i64,
}

/// Message published to the assignment topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentNotification {
    pub topic: String,
    pub subject: String,
    pub body: String,
    pub interview_id: String,
}

impl AssignmentNotification {
    pub fn for_assignment(topic: &str, assignment: &InterviewAssignment) -> Self {
        Self {
            topic: topic.to_string(),
            subject: format!("New Interview (id: {})", assignment.id),
            body: format!(
                "A new interview is ready for review:\r\n{}\r\n\r\nRate at {}",
                assignment.request, assignment.interview_url
            ),
            interview_id: assignment.id.clone(),
        }
    }
}
