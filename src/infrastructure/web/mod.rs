use crate::{
    domain::entities::{CallbackStatus, Score},
    domain::errors::DomainError,
    infrastructure::http::middleware::{ApiError, AppState},
};
use askama::Template;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

// Template structs
#[derive(Template)]
#[template(path = "rating_form.html")]
struct RatingFormTemplate {}

#[derive(Template)]
#[template(path = "rating_confirmation.html")]
struct RatingConfirmationTemplate {
    interview_id: String,
    score: Score,
    callback_failed: bool,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    title: String,
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct RatingForm {
    pub score: i64,
}

/// Failure rendered as a small HTML page instead of JSON
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    title: &'static str,
    message: String,
}

impl PageError {
    fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            title: "Invalid rating",
            message,
        }
    }
}

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        let title = match &err {
            DomainError::NotFound(_) => "Interview not found",
            DomainError::ValidationError(_) => "Invalid rating",
            _ => "Something went wrong",
        };
        let api_error = ApiError::from(err);

        Self {
            status: api_error.status_code(),
            title,
            message: api_error.message().to_string(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let template = ErrorTemplate {
            title: self.title.to_string(),
            message: self.message,
        };
        (self.status, HtmlTemplate(template)).into_response()
    }
}

// Handlers

// GET /interview/:id - The form is static; the id is only checked on submit
pub async fn show_rating_form(Path(_interview_id): Path<String>) -> impl IntoResponse {
    HtmlTemplate(RatingFormTemplate {})
}

// POST /interview/:id - Accept a score and forward it to the caller's callback
pub async fn submit_rating(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
    form: Result<Form<RatingForm>, FormRejection>,
) -> Result<Response, PageError> {
    let Form(form) = form.map_err(|rejection| {
        tracing::warn!("Rejected rating form for {}: {}", interview_id, rejection);
        PageError::bad_request("Please choose a score before submitting.".to_string())
    })?;

    let outcome = state
        .rating_service
        .rate(&interview_id, form.score)
        .await?;

    let template = RatingConfirmationTemplate {
        interview_id: outcome.interview_id,
        score: outcome.score,
        callback_failed: matches!(outcome.callback, CallbackStatus::Failed(_)),
    };

    Ok(HtmlTemplate(template).into_response())
}

struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}
