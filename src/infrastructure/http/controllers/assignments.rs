use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    domain::entities::AssignApplicantResponse,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};

// POST /assign - Assign an applicant's interview to reviewers
pub async fn assign_applicant(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<AssignApplicantResponse>> {
    let Json(body) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let response = state.assignment_service.assign_applicant(body).await?;

    Ok(Json(response))
}

// GET /interview - Service version
pub async fn get_version(State(state): State<AppState>) -> &'static str {
    state.assignment_service.get_version()
}

// GET /health
pub async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
