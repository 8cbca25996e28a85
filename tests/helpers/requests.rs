use chrono::{TimeZone, Utc};
use serde_json::Value;
use interview_review::domain::entities::{
    AssignApplicantRequest, CallbackDetails, InterviewType, Reviewer,
};

pub const CALLBACK_URL: &str = "https://example.com/hook";

pub fn sample_request() -> AssignApplicantRequest {
    AssignApplicantRequest {
        interview_type: InterviewType::OnDemand,
        interview_id: "interview-001".to_string(),
        applicant_first_name: "Grace".to_string(),
        applicant_last_name: "Hopper".to_string(),
        applicant_email: "grace@example.com".to_string(),
        primary_owner_email: "owner@example.com".to_string(),
        recruiter_email: "recruiter@example.com".to_string(),
        job_requisition_id: "REQ-1001".to_string(),
        reviewers: vec![
            Reviewer {
                reviewer_email: "alice@example.com".to_string(),
                reviewer_name: "Alice".to_string(),
            },
            Reviewer {
                reviewer_email: "bob@example.com".to_string(),
                reviewer_name: "Bob".to_string(),
            },
        ],
        interview_start_date: Utc.with_ymd_and_hms(2026, 11, 2, 9, 0, 0).unwrap(),
        interview_end_date: Utc.with_ymd_and_hms(2026, 11, 6, 17, 0, 0).unwrap(),
        callback_data: Some(CallbackDetails {
            callback_url: Some(CALLBACK_URL.to_string()),
        }),
    }
}

pub fn sample_request_without_callback() -> AssignApplicantRequest {
    AssignApplicantRequest {
        callback_data: None,
        ..sample_request()
    }
}

/// JSON body as a caller would POST it
pub fn body_of(request: &AssignApplicantRequest) -> Value {
    serde_json::to_value(request).expect("request serializes")
}

pub fn sample_body() -> Value {
    body_of(&sample_request())
}

pub fn sample_body_without_callback() -> Value {
    body_of(&sample_request_without_callback())
}
